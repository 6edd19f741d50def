use html_escape::encode_text;

use crate::model::models::StudentRow;

/**
 * Display format for birth dates.
 */
const BIRTH_DATE_FORMAT: &str = "%d.%m.%Y";

/**
 * Renders the complete roster page: filter form, results table and
 * summary, or an info banner when no students match.
 *
 * All database-sourced text passes through HTML escaping before being
 * embedded; group numbers and the reference year are echoed only as
 * formatted integers.
 *
 * # Arguments
 * `reference_year`: The year used as the activity cutoff.
 * `groups`: Active group numbers for the selector, ascending.
 * `selected_group`: The group filter currently applied, if any.
 * `rows`: The student rows to render, already sorted.
 *
 * # Returns
 * The rendered HTML document.
 */
pub fn render_page(reference_year: i64, groups: &[i64], selected_group: Option<i64>, rows: &[StudentRow]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"UTF-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    page.push_str("<title>Student roster - University</title>\n");
    page.push_str("<style>\n");
    page.push_str("body { font-family: sans-serif; margin: 2em; }\n");
    page.push_str("table { border-collapse: collapse; }\n");
    page.push_str("th, td { border: 1px solid #999; padding: 0.3em 0.8em; }\n");
    page.push_str(".info { padding: 1em; background: #eef; }\n");
    page.push_str("</style>\n</head>\n<body>\n");

    page.push_str("<header>\n<h1>University student roster</h1>\n");
    page.push_str(&format!("<p class=\"subtitle\">Active groups (graduation year &ge; {reference_year})</p>\n</header>\n"));

    page.push_str(&render_filter_form(groups, selected_group));

    page.push_str("<main>\n");
    if rows.is_empty() {
        page.push_str("<div class=\"message info\">\n<p>No students found</p>\n</div>\n");
    } else {
        page.push_str(&render_results_table(rows));
        page.push_str(&render_summary(rows.len(), selected_group));
    }
    page.push_str("</main>\n</body>\n</html>\n");
    page
}

/**
 * Renders the group selector form. Submitting with the blank option
 * clears the filter; a reset link appears while a filter is applied.
 */
fn render_filter_form(groups: &[i64], selected_group: Option<i64>) -> String {
    let mut form = String::new();
    form.push_str("<section class=\"filter-section\">\n<form method=\"GET\" class=\"filter-form\">\n");
    form.push_str("<label for=\"group\">Filter by group:</label>\n");
    form.push_str("<select name=\"group\" id=\"group\">\n");
    form.push_str("<option value=\"\">All groups</option>\n");
    for group in groups {
        let selected = if selected_group == Some(*group) { " selected" } else { "" };
        form.push_str(&format!("<option value=\"{group}\"{selected}>Group {group}</option>\n"));
    }
    form.push_str("</select>\n");
    form.push_str("<button type=\"submit\" class=\"btn-apply\">Apply</button>\n");
    if selected_group.is_some() {
        form.push_str("<a href=\"?\" class=\"btn-reset\">Reset filter</a>\n");
    }
    form.push_str("</form>\n</section>\n");
    form
}

/**
 * Renders the results table with one row per student.
 */
fn render_results_table(rows: &[StudentRow]) -> String {
    let mut table = String::new();
    table.push_str("<table class=\"students-table\">\n<thead>\n<tr>\n");
    table.push_str("<th>Group</th>\n<th>Major</th>\n<th>Full name</th>\n<th>Gender</th>\n<th>Birth date</th>\n<th>Student ID</th>\n");
    table.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        table.push_str("<tr>\n");
        table.push_str(&format!("<td class=\"group-number\">{}</td>\n", row.group_number));
        table.push_str(&format!("<td class=\"major\">{}</td>\n", encode_text(&row.major)));
        table.push_str(&format!("<td class=\"student-name\">{}</td>\n", encode_text(&row.full_name())));
        table.push_str(&format!("<td class=\"gender\">{}</td>\n", encode_text(&row.gender)));
        table.push_str(&format!("<td class=\"birth-date\">{}</td>\n", row.birth_date.format(BIRTH_DATE_FORMAT)));
        table.push_str(&format!("<td class=\"student-id\">{}</td>\n", encode_text(&row.student_id)));
        table.push_str("</tr>\n");
    }
    table.push_str("</tbody>\n</table>\n");
    table
}

/**
 * Renders the total-count summary, naming the selected group when a
 * filter is applied.
 */
fn render_summary(total: usize, selected_group: Option<i64>) -> String {
    let mut summary = String::new();
    summary.push_str("<div class=\"summary\">\n");
    summary.push_str(&format!("<div class=\"total-count\"><span class=\"label\">Total students:</span> <span class=\"value\">{total}</span></div>\n"));
    if let Some(group) = selected_group {
        summary.push_str(&format!("<div class=\"group-info\"><span class=\"label\">Selected group:</span> <span class=\"value\">{group}</span></div>\n"));
    }
    summary.push_str("</div>\n");
    summary
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn row(major: &str, last_name: &str) -> StudentRow {
        StudentRow {
            group_number: 101,
            major: major.to_string(),
            last_name: last_name.to_string(),
            first_name: "Ivan".to_string(),
            middle_name: None,
            gender: "M".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2003, 5, 10).unwrap(),
            student_id: "S001".to_string(),
        }
    }

    #[test]
    fn test_page_contains_table_and_summary() {
        let page = render_page(2024, &[101, 102], None, &[row("CS", "Ivanov")]);
        assert!(page.contains("<td class=\"group-number\">101</td>"));
        assert!(page.contains("Ivanov Ivan"));
        assert!(page.contains("10.05.2003"));
        assert!(page.contains("Total students:"));
        assert!(page.contains("<span class=\"value\">1</span>"));
    }

    #[test]
    fn test_empty_rows_render_info_banner_without_table() {
        let page = render_page(2024, &[101], None, &[]);
        assert!(page.contains("No students found"));
        assert!(!page.contains("<tbody>"));
    }

    #[test]
    fn test_selected_group_marks_option_and_reset_link() {
        let page = render_page(2024, &[101, 102], Some(102), &[row("CS", "Ivanov")]);
        assert!(page.contains("<option value=\"102\" selected>"));
        assert!(page.contains("<option value=\"101\">"));
        assert!(page.contains("Reset filter"));
        assert!(page.contains("Selected group:"));
    }

    #[test]
    fn test_unfiltered_page_has_no_reset_link() {
        let page = render_page(2024, &[101], None, &[row("CS", "Ivanov")]);
        assert!(!page.contains("Reset filter"));
    }

    #[test]
    fn test_database_text_is_escaped() {
        let page = render_page(2024, &[101], None, &[row("<script>alert(1)</script>", "A&B")]);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("A&amp;B"));
    }
}
