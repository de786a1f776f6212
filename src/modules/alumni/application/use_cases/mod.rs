pub mod browse_alumni;
pub mod cohort_counts;
pub mod create_alumni;
pub mod delete_alumni;
pub mod get_alumni;
pub mod multi_job_alumni;
pub mod update_alumni;
