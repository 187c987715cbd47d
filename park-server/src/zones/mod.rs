//! 停车区域存储
//!
//! - [`ZoneStore`] - 进程内唯一的区域数据源
//! - [`seed_zones`] - 启动时的固定区域列表

mod seed;
mod store;

pub use seed::seed_zones;
pub use store::{ZoneError, ZoneStore, booking_result};
