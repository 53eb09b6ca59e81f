use super::{Formatter, Params, ToSql};

/// A quoted identifier.
///
/// The closing quote character is doubled wherever it appears in the name,
/// so any string is a valid identifier and none can end the quoting early.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let (open, close) = f.serializer.flavor.quotes();

        f.dst.push(open);

        for c in self.0.as_ref().chars() {
            if c == close {
                f.dst.push(close);
            }

            f.dst.push(c);
        }

        f.dst.push(close);
    }
}
