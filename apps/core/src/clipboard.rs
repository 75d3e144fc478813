pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        write_system_clipboard_text(text)
    }
}

#[derive(Debug, Default)]
pub struct MockClipboardWriter {
    writes: Vec<String>,
    fail_with: Option<String>,
}

impl MockClipboardWriter {
    pub fn failing(message: &str) -> Self {
        Self {
            writes: Vec::new(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ClipboardWriter for MockClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(message) = &self.fail_with {
            return Err(message.clone());
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn write_system_clipboard_text(value: &str) -> Result<(), String> {
    use windows_sys::Win32::System::DataExchange::{
        CloseClipboard, EmptyClipboard, OpenClipboard, SetClipboardData, CF_UNICODETEXT,
    };
    use windows_sys::Win32::System::Memory::{
        GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock, GMEM_MOVEABLE,
    };

    let wide: Vec<u16> = value.encode_utf16().chain(std::iter::once(0)).collect();
    let bytes = wide.len() * std::mem::size_of::<u16>();
    unsafe {
        if OpenClipboard(std::ptr::null_mut()) == 0 {
            return Err("failed to open clipboard".to_string());
        }
        if EmptyClipboard() == 0 {
            CloseClipboard();
            return Err("failed to clear clipboard".to_string());
        }

        let mem = GlobalAlloc(GMEM_MOVEABLE, bytes);
        if mem.is_null() {
            CloseClipboard();
            return Err("failed to allocate clipboard memory".to_string());
        }

        let ptr = GlobalLock(mem) as *mut u16;
        if ptr.is_null() {
            GlobalFree(mem);
            CloseClipboard();
            return Err("failed to lock clipboard memory".to_string());
        }
        std::ptr::copy_nonoverlapping(wide.as_ptr(), ptr, wide.len());
        GlobalUnlock(mem);

        // Ownership of `mem` passes to the system only on success.
        if SetClipboardData(CF_UNICODETEXT as u32, mem).is_null() {
            GlobalFree(mem);
            CloseClipboard();
            return Err("failed to set clipboard data".to_string());
        }

        CloseClipboard();
    }
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn write_system_clipboard_text(value: &str) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("failed to open clipboard: {e}"))?;
    clipboard
        .set_text(value.to_string())
        .map_err(|e| format!("failed to set clipboard data: {e}"))
}

#[cfg(test)]
mod tests {
    use super::{ClipboardWriter, MockClipboardWriter};

    #[test]
    fn mock_records_writes_in_order() {
        let mut writer = MockClipboardWriter::default();
        writer.write_text("one").unwrap();
        writer.write_text("two\nlines").unwrap();
        assert_eq!(writer.writes(), ["one", "two\nlines"]);
    }

    #[test]
    fn failing_mock_reports_error_without_recording() {
        let mut writer = MockClipboardWriter::failing("busy");
        assert_eq!(writer.write_text("x"), Err("busy".to_string()));
        assert!(writer.writes().is_empty());
    }
}
