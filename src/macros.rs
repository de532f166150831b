/// Builds a [`PostingList`](crate::core::posting_list::PostingList) from `(row_id, score)` pairs.
///
/// Pairs must already be sorted by `row_id`, the macro only appends.
#[macro_export]
macro_rules! posting_list(
    () => {
        {
            ($crate::core::posting_list::PostingList::default())
        }
    }; // avoids a warning due to the useless `mut`.
    ($(($row_id:expr, $score:expr)),*) => {
        {
            let mut posting = $crate::core::posting_list::PostingList::default();
            $(
                posting.add_posting($row_id, $score);
            )*
            posting
        }
    };
    // if there is a trailing comma retry with the trailing comma stripped.
    ($(($row_id:expr, $score:expr)),+ ,) => {
        $crate::posting_list!( $( ($row_id, $score) ), *)
    };
);
