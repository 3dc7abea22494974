//! Plain-text and JSON rendering of design results.

use mix_design::MixReport;

use crate::design_service::DesignOutcome;
use crate::error::AppResult;

pub const PRELIMINARY_NOTE: &str = "Note: This is a preliminary mix design. \
Conduct trial mixes with actual materials and adjust as needed.";

fn percent(fraction: f64) -> f64 {
    fraction * 100.0
}

pub fn render_text(report: &MixReport) -> String {
    let cement_note = if report.min_cement_governs {
        " (exposure minimum)"
    } else {
        ""
    };

    let lines = [
        "Design results".to_string(),
        format!(
            "  Target strength      {:>8.2} N/mm²  (std dev {:.2})",
            report.target_strength_mpa, report.std_dev_mpa
        ),
        format!("  W/C ratio            {:>8.3}", report.wc_ratio),
        format!(
            "  Water content        {:>8.0} kg/m³",
            report.water_content_kg_m3
        ),
        format!(
            "  Cement content       {:>8.0} kg/m³{cement_note}",
            report.cement_content_kg_m3
        ),
        String::new(),
        "Mix proportions".to_string(),
        format!("  Fine aggregate       {:>7.1} %", percent(report.vol_fine)),
        format!("  Coarse aggregate     {:>7.1} %", percent(report.vol_coarse)),
        format!("  Air content          {:>7.1} %", percent(report.air_content)),
        String::new(),
        "Design parameters".to_string(),
        format!("  Concrete grade       {}", report.grade),
        format!("  Exposure             {}", report.exposure),
        String::new(),
        PRELIMINARY_NOTE.to_string(),
    ];
    lines.join("\n")
}

pub fn render_json(outcome: &DesignOutcome) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> MixReport {
        MixReport {
            grade: "M20".into(),
            exposure: "Moderate".into(),
            target_strength_mpa: 26.6,
            std_dev_mpa: 4.0,
            wc_ratio: 0.45,
            water_content_kg_m3: 192.0,
            cement_content_kg_m3: 427.0,
            min_cement_governs: false,
            vol_coarse: 0.63,
            vol_fine: 0.37,
            air_content: 0.01,
        }
    }

    #[test]
    fn text_lists_every_quantity() {
        let text = render_text(&report());
        assert!(text.contains("26.60 N/mm²"));
        assert!(text.contains("0.450"));
        assert!(text.contains("192 kg/m³"));
        assert!(text.contains("427 kg/m³"));
        assert!(text.contains("37.0 %"));
        assert!(text.contains("63.0 %"));
        assert!(text.contains("1.0 %"));
        assert!(text.contains("M20"));
        assert!(text.contains("Moderate"));
        assert!(text.ends_with(PRELIMINARY_NOTE));
        assert!(!text.contains("exposure minimum"));
    }

    #[test]
    fn governing_minimum_is_flagged() {
        let mut report = report();
        report.min_cement_governs = true;
        assert!(render_text(&report).contains("(exposure minimum)"));
    }
}
