//! C-ABI FFI bindings for host web runtimes.
//!
//! Exposes the renderer to other languages (Node.js, C#, Python). The
//! profile crosses the boundary as a JSON string in the questionnaire's
//! camelCase shape; the document comes back as an owned byte buffer.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::model::RiskProfile;
use crate::render::{self, RenderOptions};

/// Result buffer returned by FFI render functions.
#[repr(C)]
pub struct PlanPdfBuffer {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Document bytes (null if failed). Free with `planpdf_free_buffer`.
    pub data: *mut u8,
    /// Length of `data` in bytes.
    pub len: usize,
    /// Error message (null if succeeded). Freed with `planpdf_free_buffer`.
    pub error: *mut c_char,
}

impl PlanPdfBuffer {
    fn success(bytes: Vec<u8>) -> Self {
        let mut boxed = bytes.into_boxed_slice();
        let data = boxed.as_mut_ptr();
        let len = boxed.len();
        std::mem::forget(boxed);
        Self {
            success: true,
            data,
            len,
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            len: 0,
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

unsafe fn parse_profile(profile_json: *const c_char) -> Result<Option<RiskProfile>, String> {
    if profile_json.is_null() {
        return Ok(None);
    }
    let json = CStr::from_ptr(profile_json)
        .to_str()
        .map_err(|_| "Invalid UTF-8 profile".to_string())?;
    let profile: RiskProfile =
        serde_json::from_str(json).map_err(|e| format!("Invalid profile JSON: {}", e))?;
    Ok(Some(profile))
}

/// Render a markdown plan to PDF bytes.
///
/// # Safety
///
/// `markdown` must be a valid null-terminated UTF-8 string. `profile_json`
/// must be null or a valid null-terminated UTF-8 JSON string. The returned
/// buffer must be freed with `planpdf_free_buffer`.
#[no_mangle]
pub unsafe extern "C" fn planpdf_render(
    markdown: *const c_char,
    profile_json: *const c_char,
) -> PlanPdfBuffer {
    if markdown.is_null() {
        return PlanPdfBuffer::error("Markdown cannot be null".to_string());
    }

    let markdown_str = match CStr::from_ptr(markdown).to_str() {
        Ok(s) => s,
        Err(_) => return PlanPdfBuffer::error("Invalid UTF-8 markdown".to_string()),
    };

    let profile = match parse_profile(profile_json) {
        Ok(p) => p,
        Err(e) => return PlanPdfBuffer::error(e),
    };

    match render::to_pdf(markdown_str, profile.as_ref(), &RenderOptions::default()) {
        Ok(bytes) => PlanPdfBuffer::success(bytes),
        Err(e) => PlanPdfBuffer::error(e.to_string()),
    }
}

/// Number of pages the given plan renders to.
///
/// # Safety
///
/// Same contracts as `planpdf_render`. Returns -1 on error.
#[no_mangle]
pub unsafe extern "C" fn planpdf_page_count(
    markdown: *const c_char,
    profile_json: *const c_char,
) -> i32 {
    if markdown.is_null() {
        return -1;
    }
    let markdown_str = match CStr::from_ptr(markdown).to_str() {
        Ok(s) => s,
        Err(_) => return -1,
    };
    let profile = match parse_profile(profile_json) {
        Ok(p) => p,
        Err(_) => return -1,
    };

    match render::render(markdown_str, profile.as_ref(), &RenderOptions::default()) {
        Ok(doc) => doc.page_count() as i32,
        Err(_) => -1,
    }
}

/// Free a buffer returned by a planpdf function.
///
/// # Safety
///
/// The buffer must have been returned by a planpdf function and must be
/// freed at most once.
#[no_mangle]
pub unsafe extern "C" fn planpdf_free_buffer(buffer: PlanPdfBuffer) {
    if !buffer.data.is_null() {
        drop(Vec::from_raw_parts(buffer.data, buffer.len, buffer.len));
    }
    if !buffer.error.is_null() {
        drop(CString::from_raw(buffer.error));
    }
}

/// Get the version of the planpdf library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn planpdf_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = planpdf_version();
        assert!(!version.is_null());
    }

    #[test]
    fn test_null_markdown() {
        unsafe {
            let result = planpdf_render(ptr::null(), ptr::null());
            assert!(!result.success);
            assert!(!result.error.is_null());
            planpdf_free_buffer(result);
        }
    }

    #[test]
    fn test_render_roundtrip() {
        let markdown = CString::new("# Plan\n\n- Rule").unwrap();
        let profile = CString::new(
            r#"{"capital":10000,"riskPerTradePct":1,"maxDailyLossPct":3}"#,
        )
        .unwrap();
        unsafe {
            let result = planpdf_render(markdown.as_ptr(), profile.as_ptr());
            assert!(result.success);
            assert!(!result.data.is_null());
            let bytes = std::slice::from_raw_parts(result.data, result.len);
            assert!(bytes.starts_with(b"%PDF"));
            planpdf_free_buffer(result);
        }
    }

    #[test]
    fn test_invalid_profile_json() {
        let markdown = CString::new("# Plan").unwrap();
        let profile = CString::new("not json").unwrap();
        unsafe {
            let result = planpdf_render(markdown.as_ptr(), profile.as_ptr());
            assert!(!result.success);
            planpdf_free_buffer(result);
        }
    }

    #[test]
    fn test_page_count() {
        let markdown = CString::new("# Plan\n\nText").unwrap();
        unsafe {
            assert_eq!(planpdf_page_count(markdown.as_ptr(), ptr::null()), 2);
            assert_eq!(planpdf_page_count(ptr::null(), ptr::null()), -1);
        }
    }
}
