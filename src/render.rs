//! HTML table showing who plays whom in a round.

use crate::round::Match;

/// File the table is written to.
pub const TABLE_FILE_NAME: &str = "table.html";

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
#players {
  font-family: "Trebuchet MS", Arial, Helvetica, sans-serif;
  border-collapse: collapse;
  width: 100%;
}

#players td, #players th {
  border: 1px solid #ddd;
  padding: 8px;
}

#players tr:nth-child(even){background-color: #f2f2f2;}

#players tr:hover {background-color: #ddd;}

#players th {
  padding-top: 12px;
  padding-bottom: 12px;
  text-align: left;
  background-color: #4CAF50;
  color: white;
}
</style>
</head>
<body>

<table id="players">
  <tr>
    <th>Player 1</th>
    <th>Player 2</th>
  </tr>
"#;

const FOOTER: &str = r#"</table>

</body>
</html>
"#;

/// Renders the pairings of a round. Winners are not shown.
pub fn render_table(matches: &[Match]) -> String {
    let mut html = String::from(HEADER);
    for record in matches {
        html.push_str("  <tr>\n");
        for player in [&record.player1, &record.player2] {
            html.push_str("    <td>");
            html.push_str(&html_escape::encode_text(player));
            html.push_str("</td>\n");
        }
        html.push_str("  </tr>\n");
    }
    html.push_str(FOOTER);
    html
}
