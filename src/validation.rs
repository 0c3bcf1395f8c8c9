//! Planner form validation
//!
//! Pure checks over the draft form state. Every rule is evaluated
//! independently so all applicable errors surface together; nothing here
//! touches the network or filesystem.

/// Maximum number of closet images per analyze request
pub const MAX_UPLOAD_FILES: usize = 8;

/// Maximum size per uploaded image; the server enforces the same bound
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Media types the analyze endpoint accepts
pub const ALLOWED_FILE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A closet image staged for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Draft form state for the guest planner
///
/// Owned by the planner session and replaced wholesale on each edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerFormValues {
    pub files: Vec<UploadFile>,
    pub manual_clothes_text: String,
    pub occasion: String,
    pub itinerary: String,
    pub preferences: String,
}

/// Sparse field-to-message error map
///
/// A `None` field is valid. The map is recomputed fresh on every
/// validation pass, never merged, so stale errors cannot linger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerFormErrors {
    pub files: Option<String>,
    pub manual_clothes_text: Option<String>,
    pub occasion: Option<String>,
    pub itinerary: Option<String>,
    pub form: Option<String>,
}

impl PlannerFormErrors {
    pub fn has_errors(&self) -> bool {
        self.files.is_some()
            || self.manual_clothes_text.is_some()
            || self.occasion.is_some()
            || self.itinerary.is_some()
            || self.form.is_some()
    }

    /// Field/message pairs for rendering, in a fixed order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(message) = &self.form {
            out.push(("form", message.as_str()));
        }
        if let Some(message) = &self.files {
            out.push(("files", message.as_str()));
        }
        if let Some(message) = &self.manual_clothes_text {
            out.push(("manual_clothes_text", message.as_str()));
        }
        if let Some(message) = &self.occasion {
            out.push(("occasion", message.as_str()));
        }
        if let Some(message) = &self.itinerary {
            out.push(("itinerary", message.as_str()));
        }
        out
    }
}

/// Validate the planner form
///
/// The `files` field has several rules that can apply to the same input;
/// they are evaluated in a fixed order (count, empty, oversize, type) and
/// the last one to fire wins the field.
pub fn validate_planner_form(values: &PlannerFormValues) -> PlannerFormErrors {
    let mut errors = PlannerFormErrors::default();
    let manual_text = values.manual_clothes_text.trim();

    if manual_text.is_empty() && values.files.is_empty() {
        errors.form = Some("Add closet images or manual clothes text before submitting.".to_string());
    }

    if values.files.len() > MAX_UPLOAD_FILES {
        errors.files = Some(format!("Upload up to {} images.", MAX_UPLOAD_FILES));
    }

    if let Some(empty) = values.files.iter().find(|file| file.bytes.is_empty()) {
        errors.files = Some(format!("File '{}' is empty.", empty.file_name));
    }

    if let Some(oversize) = values.files.iter().find(|file| file.bytes.len() > MAX_UPLOAD_BYTES) {
        errors.files = Some(format!(
            "File '{}' exceeds {}MB limit.",
            oversize.file_name,
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }

    if let Some(invalid) = values
        .files
        .iter()
        .find(|file| !ALLOWED_FILE_TYPES.contains(&file.mime_type.as_str()))
    {
        errors.files = Some(format!(
            "Unsupported file type for {}. Use JPG, PNG, or WEBP.",
            invalid.file_name
        ));
    }

    if values.occasion.trim().is_empty() {
        errors.occasion = Some("Occasion is required.".to_string());
    }

    if values.itinerary.trim().is_empty() {
        errors.itinerary = Some("Itinerary is required.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str, mime: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            mime_type: mime.to_string(),
            bytes: vec![0u8; 16],
        }
    }

    fn valid_values() -> PlannerFormValues {
        PlannerFormValues {
            files: Vec::new(),
            manual_clothes_text: "white tee, black jeans".to_string(),
            occasion: "Team dinner".to_string(),
            itinerary: "Dinner then drinks".to_string(),
            preferences: String::new(),
        }
    }

    #[test]
    fn empty_form_reports_form_occasion_and_itinerary() {
        let errors = validate_planner_form(&PlannerFormValues::default());

        assert!(errors.has_errors());
        assert_eq!(
            errors.form.as_deref(),
            Some("Add closet images or manual clothes text before submitting.")
        );
        assert_eq!(errors.occasion.as_deref(), Some("Occasion is required."));
        assert_eq!(errors.itinerary.as_deref(), Some("Itinerary is required."));
        assert!(errors.files.is_none());
    }

    #[test]
    fn whitespace_only_manual_text_counts_as_empty() {
        let values = PlannerFormValues {
            manual_clothes_text: "   \n\t".to_string(),
            ..valid_values()
        };
        let errors = validate_planner_form(&values);
        assert!(errors.form.is_some());
    }

    #[test]
    fn manual_text_alone_satisfies_the_form_rule() {
        let errors = validate_planner_form(&valid_values());
        assert!(!errors.has_errors());
    }

    #[test]
    fn nine_files_trip_the_count_rule() {
        let values = PlannerFormValues {
            files: (0..9).map(|i| image(&format!("look-{i}.jpg"), "image/jpeg")).collect(),
            ..valid_values()
        };
        let errors = validate_planner_form(&values);
        assert_eq!(errors.files.as_deref(), Some("Upload up to 8 images."));
    }

    #[test]
    fn unsupported_type_names_the_offending_file() {
        let values = PlannerFormValues {
            files: vec![image("selfie.gif", "image/gif")],
            ..valid_values()
        };
        let errors = validate_planner_form(&values);
        assert_eq!(
            errors.files.as_deref(),
            Some("Unsupported file type for selfie.gif. Use JPG, PNG, or WEBP.")
        );
    }

    #[test]
    fn type_rule_overwrites_count_rule_when_both_fire() {
        let mut files: Vec<UploadFile> =
            (0..9).map(|i| image(&format!("look-{i}.jpg"), "image/jpeg")).collect();
        files.push(image("selfie.gif", "image/gif"));

        let values = PlannerFormValues { files, ..valid_values() };
        let errors = validate_planner_form(&values);
        assert_eq!(
            errors.files.as_deref(),
            Some("Unsupported file type for selfie.gif. Use JPG, PNG, or WEBP.")
        );
    }

    #[test]
    fn empty_file_is_rejected() {
        let mut file = image("blank.png", "image/png");
        file.bytes.clear();

        let values = PlannerFormValues { files: vec![file], ..valid_values() };
        let errors = validate_planner_form(&values);
        assert_eq!(errors.files.as_deref(), Some("File 'blank.png' is empty."));
    }

    #[test]
    fn oversize_file_is_rejected_with_limit_in_message() {
        let mut file = image("huge.jpg", "image/jpeg");
        file.bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];

        let values = PlannerFormValues { files: vec![file], ..valid_values() };
        let errors = validate_planner_form(&values);
        assert_eq!(errors.files.as_deref(), Some("File 'huge.jpg' exceeds 10MB limit."));
    }

    #[test]
    fn all_applicable_errors_surface_together() {
        let values = PlannerFormValues {
            files: vec![image("selfie.gif", "image/gif")],
            manual_clothes_text: String::new(),
            occasion: String::new(),
            itinerary: String::new(),
            preferences: String::new(),
        };
        let errors = validate_planner_form(&values);

        assert!(errors.files.is_some());
        assert!(errors.occasion.is_some());
        assert!(errors.itinerary.is_some());
        // A staged file satisfies the either-input rule even if its type is wrong.
        assert!(errors.form.is_none());
    }
}
