pub mod application;
pub mod attachment;
pub mod responses;
pub mod writer;

pub use application::{
    parse_rate, ApplicantDetails, ApplicationForm, ApplicationRecord, FormField,
    UploadedAttachment,
};
pub use attachment::Attachment;
pub use responses::{ApplyResponse, UploadResponse};
pub use writer::{FilterOptions, Rate, Writer, WriterFilter};
