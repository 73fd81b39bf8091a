#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cohort_builder::{DatasetBuilder, PipelineConfig};

    use crate::utils::{test_dir, write_tsv};

    const PATIENTS: &str = "PNR\tBIRTH_DATE\tSTATUS_DATE\tSTATUS\n\
        P001\t1950-01-01\t2013-06-01\t90\n\
        P002\t1950-01-01\t2020-01-01\t1\n\
        P003\t1940-01-01\t2020-01-01\t1\n\
        P004\t1950-01-01\t2013-01-01\t1\n\
        P005\t1960-01-01\t2020-06-01\t1\n\
        P006\t1955-01-01\t2019-01-01\t90\n";

    const ADMISSIONS: &str = "PNR\tADMISSION_DATE\n\
        P001\t2010-01-01\n\
        P001\t2012-05-01\n\
        P002\t2010-01-01\n\
        P003\t2010-01-01\n\
        P004\t2010-01-01\n\
        P005\t2011-03-01\n\
        P006\t2016-02-01\n";

    const TRAJECTORIES: &str = "PNR\tDISEASE1\tDISEASE2\tDISEASE3\tDISEASE4\n\
        P001\tI21\tI50\tJ18\tA41\n\
        P001\tI21\tI50\tJ18\tA41\n\
        P002\tI21\tI50\tJ18\tA41\n\
        P002\tE11\tN18\tI50\tA41\n\
        P005\tE11\tN18\tI50\tA41\n\
        P006\tC34\tJ18\tA41\tI50\n\
        P099\tQ21\tI50\tJ18\tA41\n";

    fn write_inputs(name: &str) -> std::path::PathBuf {
        let dir = test_dir(name);
        write_tsv(&dir, "patients.tsv", PATIENTS);
        write_tsv(&dir, "admissions.tsv", ADMISSIONS);
        write_tsv(&dir, "trajectories.tsv", TRAJECTORIES);
        dir
    }

    fn config(seed: u64) -> PipelineConfig {
        PipelineConfig {
            random_seed: Some(seed),
            ..Default::default()
        }
    }

    fn build(dir: &std::path::Path, seed: u64) -> cohort_builder::StudyDataset {
        DatasetBuilder::new()
            .with_config(config(seed))
            .load_patients(&dir.join("patients.tsv"))
            .unwrap()
            .load_admissions(&dir.join("admissions.tsv"))
            .unwrap()
            .load_trajectories(&dir.join("trajectories.tsv"))
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_end_to_end_pipeline() {
        let dir = write_inputs("end_to_end");
        let dataset = build(&dir, 42);

        // P003 is too old at diagnosis, P004 is censored; the rest remain
        let cohort_pnrs: HashSet<&str> = dataset
            .cohort
            .entries()
            .iter()
            .map(|entry| entry.pnr.as_str())
            .collect();
        assert_eq!(
            cohort_pnrs,
            HashSet::from(["P001", "P002", "P005", "P006"])
        );

        // P001 died 3.4 years after diagnosis, P006 2.9 years after
        assert_eq!(dataset.cohort.positive_count(), 2);

        // Four unique trajectories, including P099's cohort-free one
        assert_eq!(dataset.catalog.len(), 4);

        // P099 has no patient record, so its trajectory column is all-zero
        // in both partitions
        let q21_column = 3;
        for partition in [&dataset.split.train, &dataset.split.test] {
            for row in partition.rows() {
                assert_eq!(row[q21_column], 0);
            }
        }

        // All cohort patients carry trajectory rows, so the split covers
        // the full cohort
        let split_pnrs: HashSet<&str> = dataset
            .split
            .train_pnrs
            .iter()
            .chain(dataset.split.test_pnrs.iter())
            .map(String::as_str)
            .collect();
        assert_eq!(split_pnrs, cohort_pnrs);
    }

    #[test]
    fn test_pipeline_is_reproducible_with_a_seed() {
        let dir = write_inputs("reproducible");

        let first = build(&dir, 7);
        let second = build(&dir, 7);

        assert_eq!(first.split.train_pnrs, second.split.train_pnrs);
        assert_eq!(first.split.test_pnrs, second.split.test_pnrs);
        assert_eq!(first.split.train.labels(), second.split.train.labels());
    }

    #[test]
    fn test_outcome_labels_match_cohort() {
        let dir = write_inputs("labels_match");
        let dataset = build(&dir, 11);

        let outcomes = dataset.cohort.outcomes_by_pnr();
        for (partition, pnrs) in [
            (&dataset.split.train, &dataset.split.train_pnrs),
            (&dataset.split.test, &dataset.split.test_pnrs),
        ] {
            for (row, pnr) in pnrs.iter().enumerate() {
                assert_eq!(partition.labels()[row], outcomes[pnr.as_str()]);
            }
        }
    }
}
