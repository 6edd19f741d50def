use crate::model::models::StudentRow;

/**
 * Fixed content width of the gender column.
 */
const GENDER_WIDTH: usize = 6;

/**
 * Fixed content width of the birth date column.
 */
const BIRTH_DATE_WIDTH: usize = 12;

/**
 * Fixed content width of the student id column.
 */
const STUDENT_ID_WIDTH: usize = 15;

/**
 * Upper bound on the long-text columns (major, full name). Cells beyond
 * it are truncated with the ellipsis marker.
 */
const LONG_TEXT_CAP: usize = 40;

/**
 * Marker appended to truncated cells.
 */
const TRUNCATION_MARKER: &str = "...";

const HEADER_GROUP: &str = "Group";
const HEADER_MAJOR: &str = "Major";
const HEADER_NAME: &str = "Full name";
const HEADER_GENDER: &str = "Gender";
const HEADER_BIRTH_DATE: &str = "Birth date";
const HEADER_STUDENT_ID: &str = "Student ID";

/**
 * Display format for birth dates.
 */
const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/**
 * Renders the student rows as a fixed-width ASCII table followed by a
 * total-count summary line.
 *
 * Column widths are seeded with the header labels, expanded to the
 * longest cell and, for the long-text columns, clamped to a fixed cap.
 * Widths are measured in characters, not bytes, so non-ASCII majors and
 * names align correctly.
 *
 * # Arguments
 * `rows`: The student rows to render, already sorted.
 *
 * # Returns
 * The rendered table. Empty for an empty row slice; the caller is
 * expected to print an empty-result message instead.
 */
pub fn render_table(rows: &[StudentRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut group_width = display_width(HEADER_GROUP);
    let mut major_width = display_width(HEADER_MAJOR);
    let mut name_width = display_width(HEADER_NAME);
    for row in rows {
        group_width = group_width.max(display_width(&row.group_number.to_string()));
        major_width = major_width.max(display_width(&row.major));
        name_width = name_width.max(display_width(&row.full_name()));
    }
    major_width = major_width.min(LONG_TEXT_CAP);
    name_width = name_width.min(LONG_TEXT_CAP);

    let widths = [group_width, major_width, name_width, GENDER_WIDTH, BIRTH_DATE_WIDTH, STUDENT_ID_WIDTH];
    let border = render_border(&widths);

    let mut table = String::new();
    table.push_str(&border);
    table.push_str(&render_row(&[HEADER_GROUP, HEADER_MAJOR, HEADER_NAME, HEADER_GENDER, HEADER_BIRTH_DATE, HEADER_STUDENT_ID], &widths));
    table.push_str(&border);
    for row in rows {
        let birth_date = row.birth_date.format(BIRTH_DATE_FORMAT).to_string();
        table.push_str(&render_row(&[&row.group_number.to_string(), &row.major, &row.full_name(), &row.gender, &birth_date, &row.student_id], &widths));
    }
    table.push_str(&border);
    table.push_str(&format!("\nTotal students: {}\n", rows.len()));
    table
}

/**
 * Renders a `+`-joined border line of dash runs sized to each column.
 */
fn render_border(widths: &[usize]) -> String {
    let mut border = String::from("+");
    for width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border.push('\n');
    border
}

/**
 * Renders one table row with every cell padded or truncated to its
 * column width.
 */
fn render_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let clipped = clip(cell, *width);
        line.push(' ');
        line.push_str(&clipped);
        line.push_str(&" ".repeat(width - display_width(&clipped)));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

/**
 * Width of a value in display characters rather than storage bytes.
 */
fn display_width(value: &str) -> usize {
    value.chars().count()
}

/**
 * Truncates a value to the given width, ending it with the ellipsis
 * marker when anything was cut off.
 */
fn clip(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    let marker_width = display_width(TRUNCATION_MARKER);
    if width <= marker_width {
        return value.chars().take(width).collect();
    }
    let mut clipped: String = value.chars().take(width - marker_width).collect();
    clipped.push_str(TRUNCATION_MARKER);
    clipped
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn row(group_number: i64, major: &str, last_name: &str, first_name: &str) -> StudentRow {
        StudentRow {
            group_number,
            major: major.to_string(),
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_name: None,
            gender: "M".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2003, 5, 10).unwrap(),
            student_id: "S001".to_string(),
        }
    }

    #[test]
    fn test_empty_rows_render_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_table_contains_headers_and_summary() {
        let table = render_table(&[row(101, "CS", "Ivanov", "Ivan")]);
        assert!(table.contains("| Group"));
        assert!(table.contains("Student ID"));
        assert!(table.contains("Ivanov Ivan"));
        assert!(table.ends_with("Total students: 1\n"));
    }

    #[test]
    fn test_birth_date_display_format() {
        let table = render_table(&[row(101, "CS", "Ivanov", "Ivan")]);
        assert!(table.contains("10.05.2003"));
    }

    #[test]
    fn test_column_width_covers_longest_cell() {
        let rows = [row(101, "CS", "Ivanov", "Ivan"), row(101, "Applied Mathematics", "Ivanov", "Ivan")];
        let table = render_table(&rows);
        // Every line of the table body has the same display width.
        let line_widths: Vec<usize> = table.lines().take_while(|line| line.starts_with(['+', '|'])).map(display_width).collect();
        assert!(line_widths.len() >= 5);
        assert!(line_widths.iter().all(|width| *width == line_widths[0]));
        assert!(table.contains("| Applied Mathematics |"));
    }

    #[test]
    fn test_long_text_column_is_capped_with_marker() {
        let long_major = "M".repeat(LONG_TEXT_CAP + 10);
        let table = render_table(&[row(101, &long_major, "Ivanov", "Ivan")]);
        let expected = format!("{}{}", "M".repeat(LONG_TEXT_CAP - TRUNCATION_MARKER.len()), TRUNCATION_MARKER);
        assert!(table.contains(&expected));
        assert!(!table.contains(&long_major));
    }

    #[test]
    fn test_width_measured_in_characters_not_bytes() {
        // Cyrillic text is two bytes per character; alignment must not double.
        let rows = [row(101, "Прикладная математика", "Ivanov", "Ivan"), row(101, "CS", "Zzz", "Zzz")];
        let table = render_table(&rows);
        let line_widths: Vec<usize> = table.lines().take_while(|line| line.starts_with(['+', '|'])).map(display_width).collect();
        assert!(line_widths.iter().all(|width| *width == line_widths[0]));
    }

    #[test]
    fn test_clip_keeps_short_values() {
        assert_eq!(clip("CS", 10), "CS");
        assert_eq!(clip("0123456789", 10), "0123456789");
    }

    #[test]
    fn test_clip_truncates_with_marker() {
        assert_eq!(clip("0123456789", 8), "01234...");
    }
}
