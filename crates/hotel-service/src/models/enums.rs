//! 枚举类型定义

use serde::{Deserialize, Serialize};

/// 门票支付状态
///
/// 对应数据库中的 "TicketStatus" 枚举类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "TicketStatus", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    /// 已预订，尚未支付
    Reserved,
    /// 已支付
    Paid,
}

impl TicketStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_status_serde() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Reserved).unwrap(),
            "\"RESERVED\""
        );
        let status: TicketStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(status, TicketStatus::Paid);
        assert!(status.is_paid());
        assert!(!TicketStatus::Reserved.is_paid());
    }
}
