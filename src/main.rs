//! Key-insights deck generator.
//!
//! Builds the one-slide review summary for the MobileViT2 anomaly-detector
//! project and writes it to the current directory. The slide text lives
//! here as structured content; every layout decision belongs to the
//! library.

use deckforge::compose::theme::{PASTEL_BLUE, PASTEL_GREEN};
use deckforge::compose::{self, Column, Panel, Section, SlideContent, Theme};
use deckforge::pptx::Presentation;

const OUTPUT_NAME: &str = "MobileViT2-Anomaly-Detector-Key-Insights.pptx";

fn slide_content() -> SlideContent {
    let left = Panel::new("Advantages / Strengths", PASTEL_GREEN)
        .section(
            Section::new("High Recall Focus ✅")
                .sub_item("Critical for field deployment to reduce disease spread"),
        )
        .section(
            Section::new("Modular Architecture 🔄")
                .sub_item("Autoencoder and classifier can work independently or together"),
        )
        .section(
            Section::new("Ease of Data Acquisition 🌱")
                .sub_item("Autoencoder requires few or no diseased images")
                .sub_item("Classifier trained only on images autoencoder fails to detect"),
        );

    let right = Panel::new("Limitations / Recommendations", PASTEL_BLUE)
        .section(
            Section::new("Autoencoder Limitations ⚠️")
                .sub_item("Weak decoder reduces standalone performance")
                .sub_item("Normalization may worsen results"),
        )
        .section(
            Section::new("Improvement Opportunities 💡")
                .sub_item("Enhanced decoder (skip connections + attention mechanisms)")
                .sub_item("Robust loss functions and tailored training strategies")
                .sub_item("Ensemble with classifier for sparse proprietary data"),
        );

    let bottom = vec![
        Column::new("Dataset Observations 📸", PASTEL_BLUE)
            .item("Classifier handles varied conditions (day/night)")
            .item("More diseased samples → better performance"),
        Column::new("Model Choice 🏎️", PASTEL_GREEN)
            .item("Lightweight MobileViT2 outperforms larger models like EfficientNet"),
        Column::new("Takeaway ✔️", PASTEL_BLUE)
            .item("Lightweight anomaly detector + classifier is optimal for deployment")
            .item("Reduces data collection effort and maintains high recall"),
    ];

    SlideContent { left, right, bottom }
}

fn main() -> deckforge::Result<()> {
    env_logger::init();

    let mut pres = Presentation::new();
    compose::compose_key_insights(&mut pres, &slide_content(), &Theme::default())?;
    pres.save(OUTPUT_NAME)?;

    println!("Saved: {OUTPUT_NAME}");
    Ok(())
}
