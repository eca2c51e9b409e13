//! Pre-order traversal of a field tree.

use crate::collection::FieldCollection;
use crate::field::{Field, FieldValue};

/// Iterator over `(path, field)` pairs, parents before children.
///
/// Paths join segment names with `/`. Duplicate names yield one entry per
/// physical field.
pub struct Paths<'a> {
    stack: Vec<(Option<String>, im::vector::Iter<'a, Field>)>,
    leaves_only: bool,
}

impl<'a> Paths<'a> {
    pub(crate) fn new(root: &'a FieldCollection, leaves_only: bool) -> Self {
        Self {
            stack: vec![(None, root.iter())],
            leaves_only,
        }
    }
}

impl<'a> Iterator for Paths<'a> {
    type Item = (String, &'a Field);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, fields) = self.stack.last_mut()?;
            let Some(field) = fields.next() else {
                self.stack.pop();
                continue;
            };
            let path = match prefix {
                Some(prefix) => format!("{prefix}/{}", field.name()),
                None => field.name().to_string(),
            };
            if let FieldValue::Fields(children) = field.value() {
                self.stack.push((Some(path.clone()), children.iter()));
                if self.leaves_only {
                    continue;
                }
            }
            return Some((path, field));
        }
    }
}
