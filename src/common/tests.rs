#[cfg(test)]
mod common_tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use crate::common::common::{current_time, packed_time, unix_time};

    #[test]
    fn test_current_time_is_after_2020() {
        assert!(current_time() > 1_577_836_800);
    }

    #[test]
    fn test_unix_time_roundtrip() {
        let time = UNIX_EPOCH + Duration::from_secs(1_669_397_478);
        assert_eq!(unix_time(time), 1_669_397_478);
    }

    #[test]
    fn test_unix_time_before_epoch_clamps_to_zero() {
        let time = UNIX_EPOCH - Duration::from_secs(10);
        assert_eq!(unix_time(time), 0);
    }

    #[test]
    fn test_packed_time_is_truncated_current_time() {
        let packed = packed_time();
        let full = current_time();
        // the two reads straddle at most one second
        let diff = (full as u16).wrapping_sub(packed);
        assert!(diff <= 1, "packed time diverged from wall clock");
    }

    #[test]
    fn test_unix_time_matches_system_now() {
        let now = unix_time(SystemTime::now());
        let reference = current_time();
        assert!(reference - now <= 1);
    }
}
