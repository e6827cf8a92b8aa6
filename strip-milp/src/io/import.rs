use itertools::Itertools;

use crate::entities::{Rectangle, SPInstance};
use crate::error::ValidationError;
use crate::io::ext_repr::ExtInstance;

/// Imports an instance into the library, validating every rectangle on the way in.
pub fn import(ext_instance: &ExtInstance) -> Result<SPInstance, ValidationError> {
    let rectangles = ext_instance
        .rectangles
        .iter()
        .map(|er| Rectangle::new(er.id, er.length, er.height))
        .collect_vec();

    SPInstance::new(rectangles)
}
