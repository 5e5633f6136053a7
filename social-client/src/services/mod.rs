//! # Services Module
//!
//! Everything that talks to the outside world or holds session state.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP client and endpoint groups
//! ├── session.rs  - Login / logout / cached user on top of the API client
//! ├── store.rs    - SessionStore implementations (memory, JSON file)
//! └── media.rs    - Image upload to the third-party media host
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  UI collaborators                        │
//! │                                                          │
//! │  ┌────────────────┐  ┌───────────────┐  ┌─────────────┐  │
//! │  │ SessionManager │─►│   ApiClient   │  │MediaUploader│  │
//! │  └───────┬────────┘  └──┬─────────┬──┘  └──────┬──────┘  │
//! │          │              │         │            │         │
//! │          ▼              ▼         │            │         │
//! │     ┌──────────────────────┐      │            │         │
//! │     │ SessionStore (trait) │      │            │         │
//! │     └──────────────────────┘      │            │         │
//! └───────────────────────────────────┼────────────┼─────────┘
//!                                     │ HTTP/JSON  │ multipart
//!                                     ▼            ▼
//!                        ┌──────────────────┐  ┌────────────┐
//!                        │  Social backend  │  │ Media host │
//!                        │  /api/...        │  │            │
//!                        └──────────────────┘  └────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - **ApiClient**: `reqwest::Client` is internally reference counted; the
//!   client can be wrapped in `Arc` and shared across tasks
//! - **Stores**: `parking_lot` locks, never held across `.await`

pub mod api;
pub mod media;
pub mod session;
pub mod store;
