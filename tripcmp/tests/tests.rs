#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    use test_case::test_case;
    use tripcmp::compare::{compare, report};
    use tripcmp::config::CompareConfig;
    use tripcmp::io;
    use tripcmp::io::output::CompareOutput;
    use trip_rs::util::assertions::{plan_covers_items, plan_respects_limit};

    fn init_test_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .try_init();
    }

    #[test_case("../assets/objects_to_take.txt", 10; "objects_to_take")]
    #[test_case("../assets/pets.txt", 5; "pets")]
    #[test_case("../assets/furniture.txt", 10; "furniture")]
    fn test_instance(instance_path: &str, limit: i64) {
        init_test_logger();
        let items = io::read_items(Path::new(instance_path)).unwrap();
        let config = CompareConfig {
            limit,
            ..CompareConfig::default()
        };

        let runs = compare(&items, &config).unwrap();

        let expected_runs = match items.len() <= config.max_brute_force_items {
            true => 2,
            false => 1,
        };
        assert_eq!(runs.len(), expected_runs);
        for run in &runs {
            assert!(plan_covers_items(&items, &run.plan));
            assert!(plan_respects_limit(&items, &run.plan, limit as u64));
        }
        if let [greedy, brute] = runs.as_slice() {
            assert!(brute.plan.n_trips() <= greedy.plan.n_trips());
        }

        let summary = report(&runs);
        assert_eq!(summary.matches("Number of trips:").count(), runs.len());
    }

    #[test]
    fn test_pets_report() {
        init_test_logger();
        let items = io::read_items(Path::new("../assets/pets.txt")).unwrap();
        let config = CompareConfig {
            limit: 5,
            ..CompareConfig::default()
        };
        let runs = compare(&items, &config).unwrap();

        assert_eq!(runs[0].algorithm, "greedy");
        assert_eq!(runs[1].algorithm, "brute-force");
        assert_eq!(runs[0].plan.n_trips(), 2);
        assert_eq!(runs[1].plan.n_trips(), 2);

        let summary = report(&runs);
        assert!(summary.starts_with("greedy:\nNumber of trips: 2\nTime: "));
        assert!(summary.contains("\nbrute-force:\nNumber of trips: 2\nTime: "));
    }

    #[test]
    fn test_overweight_item_is_reported() {
        init_test_logger();
        let items = io::read_items(Path::new("../assets/furniture.txt")).unwrap();
        let config = CompareConfig {
            limit: 9,
            ..CompareConfig::default()
        };
        let err = compare(&items, &config).unwrap_err();
        assert!(format!("{err:#}").contains("wardrobe"));
    }

    #[test]
    fn test_overflowing_total_weight_is_read() {
        init_test_logger();
        let path = std::env::temp_dir().join("tripcmp_overflowing_items.txt");
        std::fs::write(&path, "anvil,18446744073709551615\nfeather,1\n").unwrap();

        let items = io::read_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.total_weight(), None);

        //no trip can carry the anvil
        let config = CompareConfig {
            limit: i64::MAX,
            ..CompareConfig::default()
        };
        let err = compare(&items, &config).unwrap_err();
        assert!(format!("{err:#}").contains("anvil"));
    }

    #[test]
    fn test_missing_item_file() {
        let err = io::read_items(Path::new("../assets/does_not_exist.txt")).unwrap_err();
        assert!(err.to_string().contains("could not open item file"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CompareConfig = serde_json::from_str(r#"{ "limit": 7 }"#).unwrap();
        assert_eq!(config.limit, 7);
        assert_eq!(
            config.max_brute_force_items,
            CompareConfig::default().max_brute_force_items
        );
    }

    #[test]
    fn test_write_solution() {
        init_test_logger();
        let items = io::read_items(Path::new("../assets/pets.txt")).unwrap();
        let config = CompareConfig::default();
        let runs = compare(&items, &config).unwrap();

        let path = std::env::temp_dir().join("tripcmp_sol_pets.json");
        io::write_json(&CompareOutput::new(&items, &runs, config), &path).unwrap();

        let reader = BufReader::new(File::open(&path).unwrap());
        let output: CompareOutput = serde_json::from_reader(reader).unwrap();
        assert_eq!(output.items.len(), 4);
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.config, config);
        for result in &output.results {
            assert_eq!(result.plan.n_trips, result.plan.trips.len());
            assert!(result.plan.trips.iter().all(|trip| trip.weight <= 10));
        }
    }
}
