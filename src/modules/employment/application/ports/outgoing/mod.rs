pub mod employment_archiver;
pub mod employment_repository;

pub use employment_archiver::{
    EmploymentArchiver, EmploymentArchiverError, OwnershipStatus, TrashEntry,
};
pub use employment_repository::{
    EmploymentData, EmploymentRepository, EmploymentRepositoryError, EmploymentResult,
};
