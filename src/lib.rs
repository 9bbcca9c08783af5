// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod baybayin;
pub mod trace_init;
pub mod unicode;

use std::ffi::{c_char, CStr, CString};
use std::ptr;

pub use baybayin::{
    explain, normalize, tokenize, transliterate, ExplainResult, GlyphConfigError, GlyphTable,
    SyllableToken, TokenShape,
};

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Convert an owned String into a C string the caller must release with
/// `bay_string_free`. Returns null if the text contains an interior NUL.
fn string_to_cptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub extern "C" fn bay_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Transliterate a UTF-8 C string to Baybayin.
/// Returns an owned C string (release with `bay_string_free`), or null on
/// null / invalid-UTF-8 input.
#[no_mangle]
pub extern "C" fn bay_transliterate(text: *const c_char) -> *mut c_char {
    let Some(text_str) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    string_to_cptr(baybayin::transliterate(text_str))
}

/// Normalize a UTF-8 C string (lower-case + foreign-letter substitution)
/// without converting it. Same ownership rules as `bay_transliterate`.
#[no_mangle]
pub extern "C" fn bay_normalize(text: *const c_char) -> *mut c_char {
    let Some(text_str) = (unsafe { cptr_to_str(text) }) else {
        return ptr::null_mut();
    };
    string_to_cptr(baybayin::normalize(text_str))
}

/// Release a string returned by this library. Null is a no-op.
#[no_mangle]
pub extern "C" fn bay_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}
