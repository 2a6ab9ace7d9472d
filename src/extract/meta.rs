//! Whole-text scans for timing and yield. These are not heading-scoped:
//! generated articles mention "Prep time: 15 minutes" in prose as often as
//! in a dedicated section.

use std::sync::LazyLock;

use regex::Regex;

static PREP_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prep(?:aration)? time:?\s*([0-9]+\s*(?:minute|min|hour|hr)s?)")
        .expect("Invalid prep time regex")
});

static COOK_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)cook(?:ing)? time:?\s*([0-9]+\s*(?:minute|min|hour|hr)s?)")
        .expect("Invalid cook time regex")
});

static SERVINGS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:servings|yield|serves):?\s*([0-9]+(?:-[0-9]+)?(?:\s*(?:person|people|serving)s?)?)")
        .expect("Invalid servings regex")
});

pub(crate) fn prep_time(text: &str) -> Option<String> {
    capture_first(&PREP_TIME_REGEX, text)
}

pub(crate) fn cook_time(text: &str) -> Option<String> {
    capture_first(&COOK_TIME_REGEX, text)
}

pub(crate) fn servings(text: &str) -> Option<String> {
    capture_first(&SERVINGS_REGEX, text)
}

fn capture_first(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)?
        .get(1)
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_time_variants() {
        assert_eq!(prep_time("Prep time: 15 minutes").as_deref(), Some("15 minutes"));
        assert_eq!(prep_time("Preparation Time 20 min").as_deref(), Some("20 min"));
        assert_eq!(prep_time("prep time: 1 hour").as_deref(), Some("1 hour"));
        assert_eq!(prep_time("takes a while"), None);
    }

    #[test]
    fn test_cook_time_variants() {
        assert_eq!(cook_time("Cooking time: 45 mins").as_deref(), Some("45 mins"));
        assert_eq!(cook_time("Cook time: 2 hrs").as_deref(), Some("2 hrs"));
    }

    #[test]
    fn test_servings_variants() {
        assert_eq!(servings("Servings: 4").as_deref(), Some("4"));
        assert_eq!(servings("Yield: 4-6 servings").as_deref(), Some("4-6 servings"));
        assert_eq!(servings("Serves 2 people").as_deref(), Some("2 people"));
        assert_eq!(servings("plenty for everyone"), None);
    }

    #[test]
    fn test_scans_are_not_heading_scoped() {
        let text = "<p>Ready in no time. Prep time: 5 minutes, Cook time: 10 minutes.</p>";
        assert_eq!(prep_time(text).as_deref(), Some("5 minutes"));
        assert_eq!(cook_time(text).as_deref(), Some("10 minutes"));
    }
}
