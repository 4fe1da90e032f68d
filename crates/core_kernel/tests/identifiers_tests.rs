//! Unit tests for the typed identifiers
//!
//! Tests cover creation, parsing, conversion, and display formatting.

use core_kernel::{CustomerId, InvoiceId, InvoiceItemId};
use uuid::Uuid;

mod invoice_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = InvoiceId::new();
        let id2 = InvoiceId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = InvoiceId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = InvoiceId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(InvoiceId::prefix(), "INV");
    }

    #[test]
    fn test_parse_accepts_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id: InvoiceId = uuid.to_string().parse().unwrap();
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("INV-not-a-uuid".parse::<InvoiceId>().is_err());
    }
}

mod other_ids {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(InvoiceItemId::prefix(), "ITM");
        assert_eq!(CustomerId::prefix(), "CUS");
    }

    #[test]
    fn test_display_round_trip() {
        let id = CustomerId::new();
        let parsed: CustomerId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = InvoiceItemId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
