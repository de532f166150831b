mod errors;
mod posting;
mod posting_list;
mod posting_list_builder;
mod posting_list_iterator;
pub mod utils;

pub use errors::PostingListError;
pub use posting::Posting;
pub use posting_list::PostingList;
pub use posting_list_builder::PostingListBuilder;
pub use posting_list_iterator::PostingListIterator;
