use crate::error::ApkFileError;

pub fn get_exit_code(error: &ApkFileError) -> i32 {
    match error {
        ApkFileError::InvalidArch(_)
        | ApkFileError::InvalidRepo(_)
        | ApkFileError::MissingFile => 2,

        ApkFileError::Request { .. } | ApkFileError::HttpStatus { .. } => 20,

        _ => 1,
    }
}
