//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod attendance_repo;
pub mod participation_repo;
pub mod payment_repo;
pub mod person_repo;
pub mod tournament_repo;
pub mod training_repo;

pub use attendance_repo::AttendanceRepository;
pub use participation_repo::ParticipationRepository;
pub use payment_repo::PaymentRepository;
pub use person_repo::PersonRepository;
pub use tournament_repo::TournamentRepository;
pub use training_repo::TrainingRepository;
