pub mod examination;

pub use examination::ExaminationService;
