//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod app;
pub mod conversation;
pub mod message;
pub mod query;
pub mod review;
pub mod user;

pub use app::{AppDTO, CreateAppDTO, DownloadDTO};
pub use conversation::ConversationDTO;
pub use message::{AppRefDTO, CreateMessageDTO, MessageDTO, ParticipantDTO, SendMessageDTO};
pub use query::AppsQuery;
pub use review::{CreateReviewDTO, NewReviewDTO, ReviewDTO};
pub use user::{AuthResponseDTO, CreateUserDTO, LoginDTO, SignupDTO, UpdateUserDTO, UserDTO};
