#[cfg(test)]
mod tests {
    use test_case::test_case;
    use trip_rs::entities::{ItemSet, TransportPlan};
    use trip_rs::io::ext_repr::{ExtItem, ExtTrip};
    use trip_rs::io::{export, export_items, parse_items};
    use trip_rs::util::assertions::plan_covers_items;

    #[test]
    fn test_parse_items() {
        let text = "Maggie,3\nHerman,7\n\nBetsy, 9\n  Oreo ,6\n";
        let items = parse_items(text.as_bytes()).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items.names().collect::<Vec<_>>(), ["Maggie", "Herman", "Betsy", "Oreo"]);
        assert_eq!(items.weight("Betsy"), Some(9));
        assert_eq!(items.weight("Oreo"), Some(6));
    }

    #[test]
    fn test_parse_items_duplicate_name_keeps_last_weight() {
        let items = parse_items("dog,3\ncat,2\ndog,5\n".as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.weight("dog"), Some(5));
        //position of the first occurrence is kept
        assert_eq!(items.names().next(), Some("dog"));
    }

    #[test]
    fn test_parse_items_ignores_extra_fields() {
        let items = parse_items("dog,3,brown\n".as_bytes()).unwrap();
        assert_eq!(items.weight("dog"), Some(3));
    }

    #[test_case("dog\n", "line 1"; "missing weight")]
    #[test_case("dog,3\ncat,heavy\n", "line 2"; "non-numeric weight")]
    #[test_case("dog,-3\n", "line 1"; "negative weight")]
    #[test_case("dog,3\n\n,4\n", "line 3"; "missing name")]
    fn test_parse_items_rejects_malformed_lines(text: &str, location: &str) {
        let err = parse_items(text.as_bytes()).unwrap_err();
        assert!(
            format!("{err:#}").contains(location),
            "error does not mention {location}: {err:#}"
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let items = parse_items("".as_bytes()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_export() {
        let items: ItemSet = [("dog", 3), ("cow", 2), ("cat", 3), ("parrot", 1)]
            .into_iter()
            .collect();
        let plan = TransportPlan::new(vec![
            vec!["dog".to_string(), "cow".to_string()],
            vec!["cat".to_string(), "parrot".to_string()],
        ]);

        let ext_plan = export(&items, &plan);
        assert_eq!(ext_plan.n_trips, 2);
        assert_eq!(
            ext_plan.trips,
            vec![
                ExtTrip {
                    items: vec!["dog".to_string(), "cow".to_string()],
                    weight: 5
                },
                ExtTrip {
                    items: vec!["cat".to_string(), "parrot".to_string()],
                    weight: 4
                },
            ]
        );

        let ext_items = export_items(&items);
        assert_eq!(
            ext_items[3],
            ExtItem {
                name: "parrot".to_string(),
                weight: 1
            }
        );
    }

    #[test]
    fn test_total_weight_overflow() {
        let items = parse_items("anvil,18446744073709551615\nfeather,1\n".as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items.total_weight(), None);

        let plan = TransportPlan::from(vec![vec!["anvil".to_string(), "feather".to_string()]]);
        assert_eq!(plan.trip_weights(&items), [u64::MAX]);
        assert_eq!(export(&items, &plan).trips[0].weight, u64::MAX);
    }

    #[test]
    fn test_parse_large_item_file() {
        const N: usize = 50_000;
        let mut text = (0..N).map(|i| format!("item{i},{}\n", i % 7)).collect::<String>();
        //every tenth item is listed a second time with a new weight
        text.extend((0..N).step_by(10).map(|i| format!("item{i},100\n")));

        let items = parse_items(text.as_bytes()).unwrap();
        assert_eq!(items.len(), N);
        assert_eq!(items.weight("item0"), Some(100));
        assert_eq!(items.weight("item1"), Some(1));
        assert_eq!(items.weight("item49999"), Some(49999 % 7));
        assert!(!items.contains(&format!("item{N}")));
        assert_eq!(items.names().last(), Some("item49999"));

        let singletons: TransportPlan = items
            .names()
            .map(|name| vec![name.to_string()])
            .collect::<Vec<_>>()
            .into();
        assert!(plan_covers_items(&items, &singletons));
        let total: u64 = singletons.trip_weights(&items).iter().sum();
        assert_eq!(Some(total), items.total_weight());
    }
}
