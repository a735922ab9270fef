//! Tariff handlers - plan CRUD and attached PDF management.

mod create_tariff;
mod delete_file;
mod delete_tariff;
mod download_file;
mod get_tariff;
mod list_files;
mod list_tariffs;
#[cfg(test)]
pub(crate) mod test_support;
mod update_tariff;
mod upload_file;

pub use create_tariff::{CreateTariffCommand, CreateTariffHandler};
pub use delete_file::DeleteFileHandler;
pub use delete_tariff::DeleteTariffHandler;
pub use download_file::{DownloadFileHandler, DownloadedFile};
pub use get_tariff::GetTariffHandler;
pub use list_files::ListFilesHandler;
pub use list_tariffs::ListTariffsHandler;
pub use update_tariff::{UpdateTariffCommand, UpdateTariffHandler};
pub use upload_file::{UploadFileCommand, UploadFileHandler};
