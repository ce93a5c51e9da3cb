//! Typed repositories over the backend API.
//!
//! Every operation follows the same shape: build the request, dispatch
//! through the authenticated transport, decode the envelope, return an
//! [`Outcome`]. Errors upstream of dispatch (request assembly, connect,
//! send) are converted to `Failure` right here, the outermost safety net;
//! nothing escapes the repository boundary as an error for expected
//! failure conditions.
//!
//! [`Outcome`]: jwire_models::Outcome

mod auth;
mod employee;
mod jobs;
mod notifications;
mod recruiter;

pub use auth::AuthRepository;
pub use employee::EmployeeRepository;
pub use jobs::JobRepository;
pub use notifications::NotificationRepository;
pub use recruiter::RecruiterRepository;
