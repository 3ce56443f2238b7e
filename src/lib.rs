//! hn-search: search Hacker News stories from the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐ FetchRequest ┌──────────┐  FetchMsg  ┌──────────┐  draw()  ┌──────────┐
//! │  app.rs  │ ───────────► │ fetch.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (submit) │              │ (thread) │ (channel)  │ (state)  │          │ (render) │
//! └──────────┘              └──────────┘            └──────────┘          └──────────┘
//!      ▲                                                  ▲
//!      └────────────── handle_key_event() ────────────────┘
//!                           input.rs
//! ```
//!
//! * **`source/`**: the `StoryFetcher` trait, the `Story` record and the
//!   Hacker News search client.
//! * **`query`**: builds request URLs from search terms.
//! * **`stories`**: the fetch state machine (Idle, Loading, Success, Failure).
//! * **`history`**: recent searches, adjacent repeats collapsed.
//! * **`prefs`**: remembers the last search term between runs.
//! * **`fetch`**: runs each request on a worker thread.
//! * **`app`**: owns all application state and turns user intent into
//!   transitions and requests.
//! * **`view`**: filtering, sorting and totals derived from the state.
//! * **`ui`** / **`input`**: rendering and key handling.
//! * **`config`** / **`logging`**: command line and tracing setup.

pub mod app;
pub mod config;
pub mod fetch;
pub mod history;
pub mod input;
pub mod logging;
pub mod prefs;
pub mod query;
pub mod source;
pub mod stories;
pub mod ui;
pub mod view;
