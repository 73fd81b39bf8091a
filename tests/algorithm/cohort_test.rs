#[cfg(test)]
mod tests {
    use cohort_builder::CohortBuilder;
    use cohort_builder::models::STATUS_DEAD;

    use crate::utils::{admission, date, patient};

    fn builder() -> CohortBuilder {
        CohortBuilder::new(65.0, 5.0)
    }

    #[test]
    fn test_death_within_window_is_retained_with_outcome_one() {
        // Diagnosed at 60.0, died at 63.4: follow-up 3.4 < 5 but death
        // satisfies the inclusion OR, and the outcome is positive
        let patients = vec![patient(
            "P001",
            date(1950, 1, 1),
            date(2013, 6, 1),
            STATUS_DEAD,
        )];
        let admissions = vec![admission("P001", date(2010, 1, 1))];

        let cohort = builder().build(&patients, &admissions);

        assert_eq!(cohort.len(), 1);
        let entry = &cohort.entries()[0];
        assert_eq!(entry.age_at_diagnosis, 60.0);
        assert_eq!(entry.age_at_status, 63.4);
        assert_eq!(entry.outcome, 1);
    }

    #[test]
    fn test_long_follow_up_survivor_is_retained_with_outcome_zero() {
        // Same patient, alive at 70.0: ten years of follow-up
        let patients = vec![patient("P001", date(1950, 1, 1), date(2020, 1, 1), 1)];
        let admissions = vec![admission("P001", date(2010, 1, 1))];

        let cohort = builder().build(&patients, &admissions);

        assert_eq!(cohort.len(), 1);
        let entry = &cohort.entries()[0];
        assert_eq!(entry.age_at_status, 70.0);
        assert_eq!(entry.outcome, 0);
    }

    #[test]
    fn test_censored_patient_is_excluded() {
        // Alive with only 3.0 years of follow-up: outcome would be ambiguous
        let patients = vec![patient("P001", date(1950, 1, 1), date(2013, 1, 1), 1)];
        let admissions = vec![admission("P001", date(2010, 1, 1))];

        let cohort = builder().build(&patients, &admissions);
        assert!(cohort.is_empty());
    }

    #[test]
    fn test_old_at_diagnosis_is_excluded() {
        // Diagnosed at exactly 65.0: the age bound is exclusive
        let patients = vec![patient("P001", date(1945, 1, 1), date(2020, 1, 1), 1)];
        let admissions = vec![admission("P001", date(2010, 1, 1))];

        let cohort = builder().build(&patients, &admissions);
        assert!(cohort.is_empty());
    }

    #[test]
    fn test_follow_up_boundary_is_exclusive_both_ways() {
        // Exactly 5.0 years of follow-up: an alive patient fails the strict
        // `> 5` inclusion rule; a dead one is retained through the status
        // clause but fails the strict `< 5` outcome rule
        let alive = vec![patient("P001", date(1950, 1, 1), date(2015, 1, 1), 1)];
        let dead = vec![patient(
            "P002",
            date(1950, 1, 1),
            date(2015, 1, 1),
            STATUS_DEAD,
        )];
        let admissions = vec![
            admission("P001", date(2010, 1, 1)),
            admission("P002", date(2010, 1, 1)),
        ];

        let cohort_alive = builder().build(&alive, &admissions);
        assert!(cohort_alive.is_empty());

        let cohort_dead = builder().build(&dead, &admissions);
        assert_eq!(cohort_dead.len(), 1);
        assert_eq!(cohort_dead.entries()[0].outcome, 0);
    }

    #[test]
    fn test_patient_without_admission_is_dropped() {
        let patients = vec![
            patient("P001", date(1950, 1, 1), date(2020, 1, 1), 1),
            patient("P002", date(1950, 1, 1), date(2020, 1, 1), 1),
        ];
        let admissions = vec![admission("P001", date(2010, 1, 1))];

        let cohort = builder().build(&patients, &admissions);

        assert_eq!(cohort.len(), 1);
        assert_eq!(cohort.entries()[0].pnr, "P001");
    }

    #[test]
    fn test_multiple_admissions_use_the_earliest() {
        // Later admissions do not produce extra cohort rows and do not move
        // the diagnosis age
        let patients = vec![patient("P001", date(1950, 1, 1), date(2020, 1, 1), 1)];
        let admissions = vec![
            admission("P001", date(2016, 5, 1)),
            admission("P001", date(2010, 1, 1)),
            admission("P001", date(2012, 3, 1)),
        ];

        let cohort = builder().build(&patients, &admissions);

        assert_eq!(cohort.len(), 1);
        assert_eq!(cohort.entries()[0].age_at_diagnosis, 60.0);
    }

    #[test]
    fn test_invariants_hold_for_every_retained_patient() {
        let patients = vec![
            patient("P001", date(1950, 1, 1), date(2013, 6, 1), STATUS_DEAD),
            patient("P002", date(1950, 1, 1), date(2020, 1, 1), 1),
            patient("P003", date(1940, 1, 1), date(2020, 1, 1), 1),
            patient("P004", date(1950, 1, 1), date(2013, 1, 1), 1),
            patient("P005", date(1960, 1, 1), date(2020, 1, 1), STATUS_DEAD),
        ];
        let admissions = vec![
            admission("P001", date(2010, 1, 1)),
            admission("P002", date(2010, 1, 1)),
            admission("P003", date(2010, 1, 1)),
            admission("P004", date(2010, 1, 1)),
            admission("P005", date(2010, 1, 1)),
        ];

        let cohort = builder().build(&patients, &admissions);

        assert_eq!(cohort.len(), 3);
        for entry in cohort.entries() {
            let source = patients.iter().find(|p| p.pnr == entry.pnr).unwrap();

            assert!(entry.age_at_diagnosis < 65.0, "age bound violated: {entry:?}");
            assert!(
                entry.follow_up_years() > 5.0 || source.is_dead(),
                "inclusion rule violated: {entry:?}"
            );
            if entry.outcome == 1 {
                assert!(source.is_dead() && entry.follow_up_years() < 5.0);
            }
        }
    }
}
