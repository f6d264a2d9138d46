/// Free-text fields printed above the line chart on the first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub name: String,
    pub school: String,
    pub class_level: String,
    pub date_time: String,
    pub topic: String,
}

const FILE_STEM: &str = "Auswertung Unterrichtsbeobachtung";

impl HeaderFields {
    /// Header lines in page order, each prefixed with its German caption.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Name: {}", self.name),
            format!("Schule und Schulform: {}", self.school),
            format!("Klassenstufe: {}", self.class_level),
            format!("Tag und Uhrzeit: {}", self.date_time),
            format!("Thema: {}", self.topic),
        ]
    }

    pub fn document_title(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            FILE_STEM.to_string()
        } else {
            format!("{FILE_STEM} {name}")
        }
    }

    /// `Auswertung Unterrichtsbeobachtung_<name>.pdf`, safe to use as a file name.
    pub fn suggested_file_name(&self) -> String {
        let name: String = self
            .name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        if name.is_empty() {
            format!("{FILE_STEM}.pdf")
        } else {
            format!("{FILE_STEM}_{name}.pdf")
        }
    }
}
