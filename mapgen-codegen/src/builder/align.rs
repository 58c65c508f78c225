/// Pad the left column so the right column starts at the same offset.
///
/// Mirrors how gofmt lays out struct fields and keyed composite literals:
/// `Name` + padding + one space + `Type`. Rows with an empty right column
/// are emitted unpadded.
pub fn align_columns<L, R>(rows: &[(L, R)]) -> Vec<String>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let width = rows
        .iter()
        .filter(|(_, right)| !right.as_ref().is_empty())
        .map(|(left, _)| left.as_ref().chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(left, right)| {
            let (left, right) = (left.as_ref(), right.as_ref());
            if right.is_empty() {
                left.to_string()
            } else {
                let pad = width - left.chars().count();
                format!("{}{} {}", left, " ".repeat(pad), right)
            }
        })
        .collect()
}
