#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use test_case::test_case;

    use spmilp::config::SPMilpConfig;
    use spmilp::io;
    use spmilp::io::layout_to_svg::layout_to_svg;
    use spmilp::io::output::SPMilpOutput;
    use strip_milp::packer::StripPacker;
    use strip_milp::util::Tolerance;
    use strip_milp::util::assertions::solution_is_valid;

    #[test_case("../assets/single.json", 5.0; "single")]
    #[test_case("../assets/twins.json", 8.0; "twins")]
    #[test_case("../assets/stacked.json", 4.0; "stacked")]
    #[test_case("../assets/columns.json", 7.0; "columns")]
    fn test_instance(instance_path: &str, optimal_length: f64) {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();

        let config = SPMilpConfig::default();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = strip_milp::io::import(&ext_instance).unwrap();

        let solution = StripPacker::new(config.packer_config)
            .solve(&instance)
            .unwrap();

        assert!(approx_eq!(
            f64,
            solution.strip_length,
            optimal_length,
            epsilon = 1e-6
        ));
        assert!(solution_is_valid(&instance, &solution, Tolerance(1e-6)));

        let output = SPMilpOutput {
            instance: ext_instance.clone(),
            solution: strip_milp::io::export(&instance, &solution),
            config,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["name"], ext_instance.name.as_str());
        assert_eq!(
            json["solution"]["placements"].as_array().unwrap().len(),
            instance.n_rectangles()
        );

        let svg = layout_to_svg(&instance, &solution, config.svg_draw_options, "").to_string();
        for r in instance.rectangles() {
            assert!(svg.contains(&format!("id=\"rect_{}\"", r.id)));
        }
    }

    #[test]
    fn missing_instance_file() {
        let err = io::read_instance(Path::new("../assets/does_not_exist.json")).unwrap_err();
        assert!(err.to_string().contains("could not open instance file"));
    }

    #[test]
    fn solution_files_are_written() {
        let config = SPMilpConfig::default();
        let ext_instance = io::read_instance(Path::new("../assets/twins.json")).unwrap();
        let instance = strip_milp::io::import(&ext_instance).unwrap();
        let solution = StripPacker::new(config.packer_config)
            .solve(&instance)
            .unwrap();

        let folder = std::env::temp_dir().join("spmilp_solution_files_are_written");
        std::fs::create_dir_all(&folder).unwrap();
        let json_path = folder.join("sol_twins.json");
        let svg_path = folder.join("sol_twins.svg");

        let output = SPMilpOutput {
            instance: ext_instance.clone(),
            solution: strip_milp::io::export(&instance, &solution),
            config,
        };
        io::write_json(&output, &json_path).unwrap();
        io::write_svg(
            &layout_to_svg(&instance, &solution, config.svg_draw_options, "twins"),
            &svg_path,
        )
        .unwrap();

        let read_back: SPMilpOutput =
            serde_json::from_reader(std::fs::File::open(&json_path).unwrap()).unwrap();
        assert_eq!(read_back.instance, ext_instance);
        assert_eq!(read_back.config, config);
        assert!(approx_eq!(
            f64,
            read_back.solution.strip_length,
            8.0,
            epsilon = 1e-6
        ));
        assert!(svg_path.exists());
    }
}
