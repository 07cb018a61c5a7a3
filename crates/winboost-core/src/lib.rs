//! # Winboost Core Library
//!
//! Core logic for Winboost, a small-wins tracker: users log tasks ("wins"),
//! earn points by completing them, spend points on rewards, and report an
//! energy level that steers which task gets suggested next.
//!
//! ## Architecture
//!
//! - **Store**: one [`AppState`] tree owned by a [`Store`]; every change goes
//!   through [`Store::dispatch`] and the pure [`store::apply`] reducer
//! - **Domain records**: [`Task`], [`Reward`], [`User`], [`Settings`]
//! - **Defaults**: [`BoostSampler`] draws energy cost and time estimate from
//!   a task's boost level, outside the store; [`TaskDraft`] turns form input
//!   into an `AddTask` payload
//! - **Views**: read-only projections ([`views`]) and month grid arithmetic
//!   ([`calendar`]) consumed by screens
//! - **Config**: TOML preferences at `~/.config/winboost/config.toml`
//!
//! Nothing is persisted. Each process starts from [`AppState::seed`].

pub mod calendar;
pub mod config;
pub mod error;
pub mod reward;
pub mod settings;
pub mod store;
pub mod task;
pub mod theme;
pub mod user;
pub mod validation;
pub mod views;

pub use calendar::{month_grid, DayCell, MonthCursor};
pub use config::{Config, IdStrategy};
pub use error::{ConfigError, CoreError, ValidationError};
pub use reward::{NewReward, Reward, RewardType};
pub use settings::{Settings, SettingsPatch};
pub use store::{Action, AppState, CompletionPolicy, Store};
pub use task::boost::BoostSampler;
pub use task::draft::{TaskDraft, QUICK_TEMPLATES};
pub use task::{BoostLevel, NewTask, Task};
pub use user::User;
pub use views::{TaskFilter, ViewOptions, WinsView};
