pub mod cohort_counts;
pub mod create_alumni;
pub mod delete_alumni;
pub mod get_alumni;
pub mod list_alumni;
pub mod multi_job_alumni;
pub mod update_alumni;

pub use cohort_counts::cohort_counts_handler;
pub use create_alumni::create_alumni_handler;
pub use delete_alumni::delete_alumni_handler;
pub use get_alumni::get_alumni_handler;
pub use list_alumni::list_alumni_handler;
pub use multi_job_alumni::multi_job_alumni_handler;
pub use update_alumni::update_alumni_handler;
