use std::{fs, path::PathBuf};

use mirror_weather_core::MountPoint;

/// File-backed mount point.
///
/// Every content replacement rewrites a complete HTML document (injected
/// stylesheets plus the current markup), so a kiosk browser pointed at the
/// file always sees a consistent page.
pub struct FileMount {
    path: PathBuf,
    css: Vec<String>,
}

impl FileMount {
    pub fn new(path: PathBuf) -> Self {
        Self { path, css: Vec::new() }
    }

    fn page(&self, markup: &str) -> String {
        let mut page = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Weather</title>\n",
        );
        for css in &self.css {
            page.push_str("<style>\n");
            page.push_str(css);
            page.push_str("</style>\n");
        }
        page.push_str("</head>\n<body>\n");
        page.push_str(markup);
        page.push_str("\n</body>\n</html>\n");
        page
    }
}

impl MountPoint for FileMount {
    fn load_css(&mut self, css: &str) {
        self.css.push(css.to_string());
    }

    fn set_content(&mut self, markup: &str) {
        let page = self.page(markup);
        if let Err(err) = fs::write(&self.path, page) {
            log::error!("could not write mount file {}: {err}", self.path.display());
        }
    }
}
