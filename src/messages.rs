use crate::error::Error;

/// Display language for the presentation layer. The locale never changes
/// conversion semantics, only the wording of what gets reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// Resolves the locale to its immutable string table. Callers keep the
    /// returned table around instead of re-branching on the locale at every
    /// message site.
    pub fn table(self) -> &'static MessageTable {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

/// One language's worth of user-facing strings. `{...}` markers are filled
/// in by the accessors below.
#[derive(Debug)]
pub struct MessageTable {
    pub success: &'static str,
    pub empty_path: &'static str,
    pub file_not_found: &'static str,
    pub missing_field: &'static str,
    pub write_failed: &'static str,
    pub unrepresentable: &'static str,
    pub malformed: &'static str,
    pub io: &'static str,
}

static EN: MessageTable = MessageTable {
    success: "Done: {count} points written.",
    empty_path: "Please choose both an input file and an output file.",
    file_not_found: "The input file {path} does not exist or cannot be read.",
    missing_field: "The input file has no \"{field}\" column.",
    write_failed: "The output file {path} cannot be written.",
    unrepresentable: "Row {record}: the \"{field}\" value contains a character the CHP format cannot carry.",
    malformed: "The input file is not valid delimited text: {detail}",
    io: "File error: {detail}",
};

static RU: MessageTable = MessageTable {
    success: "Готово: записано точек: {count}.",
    empty_path: "Укажите входной и выходной файлы.",
    file_not_found: "Входной файл {path} не существует или недоступен для чтения.",
    missing_field: "Во входном файле нет столбца \"{field}\".",
    write_failed: "Не удаётся записать выходной файл {path}.",
    unrepresentable: "Строка {record}: значение \"{field}\" содержит символ, недопустимый в формате CHP.",
    malformed: "Входной файл не является корректным текстом с разделителями: {detail}",
    io: "Ошибка файла: {detail}",
};

impl MessageTable {
    pub fn success(&self, count: u64) -> String {
        self.success.replace("{count}", &count.to_string())
    }

    pub fn describe(&self, err: &Error) -> String {
        match err {
            Error::EmptyPath => self.empty_path.to_string(),
            Error::FileNotFound { path, .. } => self
                .file_not_found
                .replace("{path}", &path.display().to_string()),
            Error::MissingField { field } => self.missing_field.replace("{field}", field),
            Error::Write { path, .. } => self
                .write_failed
                .replace("{path}", &path.display().to_string()),
            Error::Unrepresentable { record, field } => self
                .unrepresentable
                .replace("{record}", &record.to_string())
                .replace("{field}", field),
            Error::Csv(e) => self.malformed.replace("{detail}", &e.to_string()),
            Error::Io(e) => self.io.replace("{detail}", &e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case::lowercase("en", Some(Locale::En))]
    #[case::uppercase("RU", Some(Locale::Ru))]
    #[case::mixed("En", Some(Locale::En))]
    #[case::unknown("de", None)]
    #[case::empty("", None)]
    fn test_from_tag(#[case] tag: &str, #[case] expected: Option<Locale>) {
        assert_eq!(Locale::from_tag(tag), expected);
    }

    #[rstest]
    fn test_success_substitutes_count() {
        assert_eq!(Locale::En.table().success(3), "Done: 3 points written.");
        assert_eq!(Locale::Ru.table().success(3), "Готово: записано точек: 3.");
    }

    fn sample_errors() -> Vec<Error> {
        let csv_error = csv::ReaderBuilder::new()
            .from_reader("a,b\nc\n".as_bytes())
            .records()
            .next()
            .unwrap()
            .unwrap_err();
        vec![
            Error::EmptyPath,
            Error::FileNotFound {
                path: PathBuf::from("in.csv"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            },
            Error::MissingField { field: "Latitude" },
            Error::Write {
                path: PathBuf::from("out.chp"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "ro"),
            },
            Error::Unrepresentable {
                record: 4,
                field: "Name",
            },
            Error::Csv(csv_error),
            Error::Io(std::io::Error::other("boom")),
        ]
    }

    #[rstest]
    #[case::english(Locale::En)]
    #[case::russian(Locale::Ru)]
    fn test_every_error_kind_has_text(#[case] locale: Locale) {
        let table = locale.table();
        for err in sample_errors() {
            let text = table.describe(&err);
            assert!(!text.is_empty());
            assert!(!text.contains("{path}"));
            assert!(!text.contains("{field}"));
            assert!(!text.contains("{record}"));
            assert!(!text.contains("{detail}"));
        }
    }

    #[rstest]
    fn test_describe_substitutes_values() {
        let text = Locale::Ru.table().describe(&Error::MissingField { field: "Name" });
        assert_eq!(text, "Во входном файле нет столбца \"Name\".");
        let text = Locale::En.table().describe(&Error::Unrepresentable {
            record: 4,
            field: "Name",
        });
        assert!(text.contains("Row 4"));
        assert!(text.contains("\"Name\""));
    }
}
