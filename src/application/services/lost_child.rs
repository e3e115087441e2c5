//! Lost child finder.
//!
//! No matching happens here: any accepted upload yields the same canned match.

use crate::application::dto::PanelOutput;
use crate::domain::entities::UploadedPhoto;

/// Label of the confirmation button.
pub const CONFIRM_BUTTON: &str = "✅ Confirm it's my child";
/// Label of the rejection button.
pub const REJECT_BUTTON: &str = "❌ Not my child – keep searching";

/// Reports a possible match for an uploaded photo, or nothing without one.
#[must_use]
pub fn lost_child_report(photo: Option<&UploadedPhoto>) -> PanelOutput {
    let Some(photo) = photo else {
        return PanelOutput::new();
    };

    PanelOutput::new()
        .image(photo.summary(), "Uploaded photo")
        .info("AI is scanning camera feeds...")
        .success("✅ Possible match found in Zone A, Block 4")
        .button(CONFIRM_BUTTON)
        .button(REJECT_BUTTON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PhotoFormat;

    #[test]
    fn test_no_upload_renders_nothing() {
        assert!(lost_child_report(None).is_empty());
    }

    #[test]
    fn test_any_upload_reports_match() {
        let photo = UploadedPhoto::new("kid.jpg", PhotoFormat::Jpeg, 4096, None);
        let output = lost_child_report(Some(&photo));

        assert!(output.mentions("Possible match found in Zone A, Block 4"));
        assert!(output.mentions("Uploaded photo"));
        assert_eq!(output.buttons(), vec![CONFIRM_BUTTON, REJECT_BUTTON]);
        assert!(output.media_links().is_empty());
    }
}
