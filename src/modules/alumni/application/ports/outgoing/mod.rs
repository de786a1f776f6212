pub mod alumni_repository;

pub use alumni_repository::{
    AlumniData, AlumniJobCount, AlumniPage, AlumniPageQuery, AlumniRepository,
    AlumniRepositoryError, AlumniResult, CohortCount, SortOrder,
};
