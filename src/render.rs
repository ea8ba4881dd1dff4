//! HTML rendering for the dashboard.
//!
//! The page chrome (Bootstrap link, legend, category styles) and the row
//! template are fixed markup; `build_row` is deterministic given its
//! inputs and is the only place reviewer strings are escaped.

use crate::models::{Category, Score};

/// Default page title.
pub const DEFAULT_TITLE: &str = "Gerrit Report";

/// Document head, legend table, and opening body for the dashboard page.
pub fn html_head(title: &str) -> String {
    format!(
        r#"<!doctype html>
  <html lang="en">
    <head>
      <!-- Required meta tags -->
      <meta charset="utf-8">
      <meta name="viewport" content="width=device-width, initial-scale=1">

      <!-- Bootstrap CSS -->
      <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.0.0-beta1/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-giJF6kkoqNQ00vy+HMDP7azOuL0xtbfIcaT9wjKHr8RbDVddVHyTfAAsrekwKmP1" crossorigin="anonymous">

      <title>{title}</title>
    <style>
      .TBD {{ background-color: gray; }}
      .WIP {{ background-color: lightgray; }}
      .VerifiedPending2 {{ background-color: pink; }}
      .VerifiedWith2 {{ background-color: lightgreen; }}
      .VerifiedWith1 {{ background-color: lightyellow; }}
      .VerifiedWith0 {{ background-color: orange; }}
      .VerifiedWithNeg1 {{ background-color: rgb(251 202 202 / 49%); }}
      .VerifiedWithNeg2 {{ background-color: rgb(251 202 202 / 100%); }}
      .NotVerified {{ background-color: lightblue; }}
      .legendCell {{ width: 40px; text-align: center; padding: 5px; }}
    </style>
    </head>
    <body>
    <table class="sticky-top start-100" style="border-color:white; border-style:solid;" border=3>
    <tr>
    <th class="bg-light">Legend: </th>
    <td class='legendCell VerifiedWith2'>V+1/CR+2</td>
    <td class='legendCell VerifiedWith1'>V+1/CR+1</td>
    <td class='legendCell VerifiedWith0'>V+1/CR&nbsp;0</td>
    <td class='legendCell VerifiedWithNeg1'>V+1/CR&nbsp;-1</td>
    <td class='legendCell VerifiedWithNeg2'>V+1/CR&nbsp;-2</td>
    <td class='legendCell WIP'>WIP</td>
    <td class='legendCell NotVerified'>Not&nbsp;Ver</td>
    </tr>
    </table>
    <h1>{title}</h1>
    "#
    )
}

/// Closing body markup with the Bootstrap script bundle.
pub fn html_foot() -> &'static str {
    r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.0.0-beta1/dist/js/bootstrap.bundle.min.js" integrity="sha384-ygbV9kiqUc6oa4msXn9868pTtWMgiQaeYH7/t7LECLbyPA2x65Kgf80OJFdroafW" crossorigin="anonymous"></script></body></html>"#
}

/// Opening markup for the patch table, including the column header row.
pub fn table_head() -> &'static str {
    r#"<table class="table">
      <thead>
      <tr>
      <th scope="col">#</th>
      <th scope="col">V</th>
      <th scope="col">CR</th>
      <th scope="col">Subject</th>
      <th scope="col">Owner</th>
      <th scope="col">Project</th>
      <th scope="col">Reviewers</th>
      </tr>
      </thead><tbody>"#
}

/// Closing markup for the patch table.
pub fn table_foot() -> &'static str {
    "</tbody></table>"
}

/// Whether the reviewer cell is rendered: only while the review score is
/// still below the +2 ceiling. A poisoned aggregate hides the cell.
fn show_reviewers(cr_score: Score) -> bool {
    match cr_score {
        Score::PlusTwo => false,
        Score::MALFORMED => false,
        Score::Int(n) => n < 2,
        Score::PlusOne | Score::NoData => true,
    }
}

/// Build one patch row.
///
/// Reviewer names keep their raw text apart from two substitutions: every
/// space becomes `&nbsp;`, and a space is inserted after each `);` in the
/// joined list so entries can wrap.
#[allow(clippy::too_many_arguments)]
pub fn build_row(
    url_base: &str,
    number: i64,
    v_score: Score,
    cr_score: Score,
    category: Category,
    reviewers: &[String],
    subject: &str,
    owner: &str,
    project: &str,
) -> String {
    let mut row = format!(
        "<tr class='{class}'>
  <td><a href='{url_base}/{number}' target='_blank'>{number}</a></td>
  <td>{v_score}</td>
  <td>{cr_score}</td>
  <td>{subject}</td>
  <td>{owner}</td>
  <td>{project}</td>
  <td>
  ",
        class = category.css_class(),
    );
    if show_reviewers(cr_score) {
        row.push_str(
            &reviewers
                .join(";")
                .replace(' ', "&nbsp;")
                .replace(");", "); "),
        );
    }
    row.push_str("</td></tr>");
    row
}
