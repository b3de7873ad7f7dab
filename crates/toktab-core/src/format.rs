//! Human-readable rendering of per-token prices and token counts.

/// Cost bucket, used only to pick a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostTier {
    Cheap,
    Moderate,
    Premium,
}

/// Format a per-token dollar cost as dollars per million tokens.
///
/// `None` renders as "-", zero as "Free". Sub-cent prices keep four
/// decimals, sub-dollar prices drop trailing zeros ("$0.5").
pub fn format_cost(cost_per_token: Option<f64>) -> String {
    let Some(cost) = cost_per_token else {
        return "-".to_string();
    };
    if cost == 0.0 {
        return "Free".to_string();
    }
    let per_million = cost * 1_000_000.0;
    if per_million < 0.01 {
        format!("${per_million:.4}")
    } else if per_million < 1.0 {
        let formatted = format!("{per_million:.2}");
        format!("${}", formatted.trim_end_matches('0').trim_end_matches('.'))
    } else {
        format!("${per_million:.2}")
    }
}

/// Format a token count as "128K", "1M", "8.2K".
pub fn format_tokens(tokens: Option<u64>) -> String {
    let Some(tokens) = tokens else {
        return "-".to_string();
    };
    if tokens >= 1_000_000 {
        let value = tokens as f64 / 1_000_000.0;
        if value == value.trunc() {
            format!("{}M", value as u64)
        } else {
            format!("{value:.1}M")
        }
    } else if tokens >= 1_000 {
        let value = tokens as f64 / 1_000.0;
        if value == value.trunc() {
            format!("{}K", value as u64)
        } else {
            format!("{value:.1}K")
        }
    } else {
        tokens.to_string()
    }
}

/// Bucket a per-token cost: under $1/1M is cheap, under $10/1M moderate.
/// Missing and free prices count as cheap.
pub fn cost_tier(cost_per_token: Option<f64>) -> CostTier {
    let Some(cost) = cost_per_token else {
        return CostTier::Cheap;
    };
    if cost == 0.0 {
        return CostTier::Cheap;
    }
    let per_million = cost * 1_000_000.0;
    if per_million < 1.0 {
        CostTier::Cheap
    } else if per_million < 10.0 {
        CostTier::Moderate
    } else {
        CostTier::Premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_none_is_dash() {
        assert_eq!(format_cost(None), "-");
    }

    #[test]
    fn cost_zero_is_free() {
        assert_eq!(format_cost(Some(0.0)), "Free");
    }

    #[test]
    fn cost_strips_trailing_zeros_below_a_dollar() {
        // $0.0000005 per token = $0.50 per million
        assert_eq!(format_cost(Some(0.000_000_5)), "$0.5");
        assert_eq!(format_cost(Some(0.000_000_25)), "$0.25");
    }

    #[test]
    fn cost_keeps_two_decimals_from_a_dollar_up() {
        // $0.000001 per token = $1 per million
        assert_eq!(format_cost(Some(0.000_001)), "$1.00");
        assert_eq!(format_cost(Some(0.000_06)), "$60.00");
    }

    #[test]
    fn cost_penny_boundary() {
        // $0.00000001 per token = $0.01 per million
        assert_eq!(format_cost(Some(0.000_000_01)), "$0.01");
    }

    #[test]
    fn cost_sub_penny_keeps_four_decimals() {
        assert_eq!(format_cost(Some(0.000_000_004_2)), "$0.0042");
    }

    #[test]
    fn tokens_none_is_dash() {
        assert_eq!(format_tokens(None), "-");
    }

    #[test]
    fn tokens_small_stays_plain() {
        assert_eq!(format_tokens(Some(500)), "500");
    }

    #[test]
    fn tokens_thousands() {
        assert_eq!(format_tokens(Some(8_000)), "8K");
        assert_eq!(format_tokens(Some(128_000)), "128K");
        assert_eq!(format_tokens(Some(8_192)), "8.2K");
    }

    #[test]
    fn tokens_millions() {
        assert_eq!(format_tokens(Some(1_000_000)), "1M");
        assert_eq!(format_tokens(Some(2_000_000)), "2M");
        assert_eq!(format_tokens(Some(1_500_000)), "1.5M");
    }

    #[test]
    fn tier_missing_and_free_are_cheap() {
        assert_eq!(cost_tier(None), CostTier::Cheap);
        assert_eq!(cost_tier(Some(0.0)), CostTier::Cheap);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(cost_tier(Some(0.000_000_5)), CostTier::Cheap);
        assert_eq!(cost_tier(Some(0.000_005)), CostTier::Moderate);
        assert_eq!(cost_tier(Some(0.000_02)), CostTier::Premium);
    }
}
