//! Star Rating Text

const MAX_STARS: usize = 5;

/// `★★★½☆` style rendering of a 0-5 rating
pub fn stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, MAX_STARS as f64);
    let full = rating.floor() as usize;
    let fraction = rating.fract();
    let half = (0.25..0.75).contains(&fraction);
    let empty = MAX_STARS - full - usize::from(half);

    let mut out = "★".repeat(full);
    if half {
        out.push('½');
    }
    out.push_str(&"☆".repeat(empty));
    out
}

pub fn review_label(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(3.5), "★★★½☆");
        assert_eq!(stars(4.8), "★★★★☆");
        assert_eq!(stars(4.2), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(7.0), "★★★★★");
    }

    #[test]
    fn test_review_label() {
        assert_eq!(review_label(0), "0 reviews");
        assert_eq!(review_label(1), "1 review");
        assert_eq!(review_label(12), "12 reviews");
    }
}
