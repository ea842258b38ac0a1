//! 다이얼로그 시스템
//!
//! 경로 입력, 확인, 알림, 도움말 다이얼로그 위젯

mod builders;
mod kind;
mod render;

pub use kind::{DialogKind, InputPurpose};
pub use render::{help_row_count, Dialog};
