//! Business logic services

pub mod attendance_service;
pub mod participation_service;
pub mod payment_service;
pub mod person_service;
pub mod tournament_service;
pub mod training_service;

pub use attendance_service::AttendanceService;
pub use participation_service::ParticipationService;
pub use payment_service::PaymentService;
pub use person_service::PersonService;
pub use tournament_service::TournamentService;
pub use training_service::TrainingService;
