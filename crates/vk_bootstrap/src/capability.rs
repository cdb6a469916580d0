//! Capability negotiation
//!
//! Partitions a requested list of extension or layer names against the
//! set the runtime reports as available. The same routine serves both
//! instance extensions and validation layers; policy (warn vs. fail) is
//! decided by the caller.

/// Outcome of matching a requested capability list against an available set.
///
/// `supported` and `unsupported` partition the request exactly: every
/// requested name lands in one of the two, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiation {
    /// Requested names the runtime reports as available; this becomes the
    /// enable-list passed to instance creation.
    pub supported: Vec<String>,
    /// Requested names absent from the available set.
    pub unsupported: Vec<String>,
}

impl Negotiation {
    /// True when every requested capability is available.
    #[must_use]
    pub fn fully_satisfied(&self) -> bool {
        self.unsupported.is_empty()
    }
}

/// Match `requested` names against `available` ones.
///
/// Names are compared with case-sensitive exact string equality. The
/// available set is queried fresh by the caller on each negotiation and
/// never cached here.
#[must_use]
pub fn negotiate(requested: &[String], available: &[String]) -> Negotiation {
    let mut supported = Vec::new();
    let mut unsupported = Vec::new();

    for name in requested {
        if available.iter().any(|a| a == name) {
            supported.push(name.clone());
        } else {
            unsupported.push(name.clone());
        }
    }

    Negotiation {
        supported,
        unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_partition_covers_request_exactly() {
        let requested = names(&["ext.platform.surface", "ext.debug.utils"]);
        let available = names(&["ext.platform.surface"]);
        let result = negotiate(&requested, &available);

        assert_eq!(result.supported, names(&["ext.platform.surface"]));
        assert_eq!(result.unsupported, names(&["ext.debug.utils"]));

        let mut union = result.supported.clone();
        union.extend(result.unsupported.clone());
        assert_eq!(union, requested);
    }

    #[test]
    fn test_fully_satisfied_when_all_available() {
        let requested = names(&["ext.platform.surface", "ext.debug.utils"]);
        let available = names(&["ext.debug.utils", "ext.platform.surface", "ext.other"]);
        let result = negotiate(&requested, &available);

        assert!(result.fully_satisfied());
        assert_eq!(result.supported, requested);
        assert!(result.unsupported.is_empty());
    }

    #[test]
    fn test_nothing_available() {
        let requested = names(&["layer.validation"]);
        let result = negotiate(&requested, &[]);

        assert!(!result.fully_satisfied());
        assert!(result.supported.is_empty());
        assert_eq!(result.unsupported, requested);
    }

    #[test]
    fn test_empty_request_is_trivially_satisfied() {
        let result = negotiate(&[], &names(&["ext.platform.surface"]));
        assert!(result.fully_satisfied());
        assert!(result.supported.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let requested = names(&["VK_LAYER_KHRONOS_validation"]);
        let available = names(&["vk_layer_khronos_validation"]);
        let result = negotiate(&requested, &available);

        assert_eq!(result.unsupported, requested);
    }

    #[test]
    fn test_request_order_preserved() {
        let requested = names(&["c", "a", "b"]);
        let available = names(&["a", "b", "c"]);
        let result = negotiate(&requested, &available);

        assert_eq!(result.supported, names(&["c", "a", "b"]));
    }
}
