#[cfg(test)]
mod tests {
    use crate::config::CounterSearchOptions;
    use crate::counters::find_counters;
    use crate::tests::common::FakeSource;
    use pretty_assertions::assert_eq;
    use schema::PokemonType;

    // Against rock/ground: grass and water are 4x; fighting, ground, ice and
    // steel are 2x.
    fn rock_ground_source() -> FakeSource {
        FakeSource::new()
            .with_type_members("water", &["Lapras", "cloyster", "ludicolo", "starmie"])
            .with_type_members("ice", &["lapras", "cloyster", "jynx"])
            .with_type_members("grass", &["ludicolo", "tangela"])
            .with_type_members("fighting", &["machamp"])
            .with_type_members("ground", &["steelix", "golem"])
            .with_type_members("steel", &["steelix"])
            .with_creature("cloyster", 91, &["water", "ice"])
            .with_creature("lapras", 131, &["water", "ice"])
            .with_creature("ludicolo", 272, &["water", "grass"])
    }

    fn names(candidates: &[crate::counters::CounterCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_candidates_are_ranked_and_annotated() {
        let source = rock_ground_source();
        let options = CounterSearchOptions::default();

        let counters = find_counters(&source, &["rock", "ground"], &options).await;

        assert_eq!(names(&counters), vec!["cloyster", "lapras", "ludicolo", "steelix"]);
        assert_eq!(
            counters[0].matching_types,
            vec![PokemonType::Ice, PokemonType::Water]
        );
        assert_eq!(counters[0].types, vec!["water", "ice"]);
        assert!(counters[0].sprite_url.ends_with("/91.png"));
        assert_eq!(counters[2].matching_summary(), "GRASS, WATER");

        // No detail record for steelix: still listed, just without types.
        assert_eq!(counters[3].types, Vec::<String>::new());
        assert_eq!(counters[3].sprite_url, "");
        assert_eq!(counters[3].types_summary(), "-");
    }

    #[tokio::test]
    async fn test_details_are_fetched_only_for_returned_candidates() {
        let source = rock_ground_source();
        let options = CounterSearchOptions::default().with_max_results(2);

        let counters = find_counters(&source, &["rock", "ground"], &options).await;

        assert_eq!(names(&counters), vec!["cloyster", "lapras"]);
        assert_eq!(source.requests_of("creature"), vec!["cloyster", "lapras"]);
    }

    #[tokio::test]
    async fn test_failed_type_lookup_only_drops_that_type() {
        let source = rock_ground_source().failing("type:water");
        let options = CounterSearchOptions::default();

        let counters = find_counters(&source, &["rock", "ground"], &options).await;

        assert_eq!(names(&counters), vec!["steelix"]);
        assert_eq!(source.requests_of("type").len(), 6);
    }

    #[tokio::test]
    async fn test_failed_detail_lookup_keeps_the_candidate() {
        let source = rock_ground_source().failing("creature:lapras");
        let options = CounterSearchOptions::default();

        let counters = find_counters(&source, &["rock", "ground"], &options).await;

        assert_eq!(names(&counters), vec!["cloyster", "lapras", "ludicolo", "steelix"]);
        assert!(counters[1].types.is_empty());
        assert_eq!(counters[2].types, vec!["water", "grass"]);
    }

    #[tokio::test]
    async fn test_min_match_above_effective_type_count_is_empty() {
        // Only fighting is super effective against normal.
        let source = FakeSource::new()
            .with_type_members("fighting", &["machamp", "hitmonlee"])
            .with_creature("machamp", 68, &["fighting"]);
        let options = CounterSearchOptions::default().with_min_match_types(2);

        let counters = find_counters(&source, &["normal"], &options).await;

        assert!(counters.is_empty());
        assert!(source.requests_of("creature").is_empty());
    }

    #[tokio::test]
    async fn test_min_match_of_one_accepts_single_type_members() {
        let source = FakeSource::new()
            .with_type_members("fighting", &["machamp", "hitmonlee"])
            .with_creature("machamp", 68, &["fighting"]);
        let options = CounterSearchOptions::default().with_min_match_types(1);

        let counters = find_counters(&source, &["normal"], &options).await;

        assert_eq!(names(&counters), vec!["hitmonlee", "machamp"]);
        assert_eq!(counters[1].types, vec!["fighting"]);
    }

    #[tokio::test]
    async fn test_no_usable_defender_types_makes_no_requests() {
        let source = rock_ground_source();
        let counters = find_counters(&source, &["", "plasma"], &CounterSearchOptions::default()).await;

        assert!(counters.is_empty());
        assert!(source.requests().is_empty());
    }

    #[tokio::test]
    async fn test_type_member_cap_limits_each_membership_list() {
        let source = rock_ground_source();
        let options = CounterSearchOptions {
            type_member_cap: 1,
            ..CounterSearchOptions::default()
        };

        let counters = find_counters(&source, &["rock", "ground"], &options).await;

        // water -> lapras, ice -> lapras, ground -> steelix, steel -> steelix
        assert_eq!(names(&counters), vec!["lapras", "steelix"]);
    }

    #[tokio::test]
    async fn test_results_are_reproducible() {
        let source = rock_ground_source();
        let options = CounterSearchOptions::default();

        let first = find_counters(&source, &["ground", "rock"], &options).await;
        let second = find_counters(&source, &["rock", "ground"], &options).await;

        assert_eq!(first, second);
    }
}
