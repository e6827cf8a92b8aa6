use serde::{Deserialize, Serialize};

use strip_milp::io::ext_repr::{ExtInstance, ExtSolution};

use crate::config::SPMilpConfig;

/// Everything written to the solution file: the instance, its solution and the config that produced it.
#[derive(Serialize, Deserialize, Clone)]
pub struct SPMilpOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: SPMilpConfig,
}
