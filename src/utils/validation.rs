//! Utilidades de validación

use validator::ValidationError;

const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "gif"];

/// Extraer la extensión de un nombre de archivo si es una imagen permitida
pub fn allowed_image_extension(file_name: &str) -> Option<String> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(extension)
    } else {
        None
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_extensions_case_insensitively() {
        assert_eq!(allowed_image_extension("car.PNG").as_deref(), Some("png"));
        assert_eq!(allowed_image_extension("photo.jpeg").as_deref(), Some("jpeg"));
        assert_eq!(allowed_image_extension("a.b.jpg").as_deref(), Some("jpg"));
    }

    #[test]
    fn rejects_non_image_files() {
        assert!(allowed_image_extension("malware.exe").is_none());
        assert!(allowed_image_extension("noextension").is_none());
        assert!(allowed_image_extension("archive.tar.gz").is_none());
    }

    #[test]
    fn empty_strings_fail_validation() {
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("ok").is_ok());
    }
}
