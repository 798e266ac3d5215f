use crate::errors::AppError;
use crate::models::AppData;
use crate::stats::all_newest_first;
use csv::Writer;

pub const EXPORT_FILENAME: &str = "avaliacoes_todas.csv";

/// Writes every stored rating, newest first, as CSV.
pub fn ratings_csv(data: &AppData) -> Result<Vec<u8>, AppError> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(["Tipo", "Avaliação", "Data", "Hora", "Número"])
        .map_err(AppError::internal)?;

    for rating in all_newest_first(data) {
        wtr.write_record(&[
            rating.tipo.code().to_string(),
            rating.tipo.label().to_string(),
            rating.avaliacao_date.clone(),
            rating.avaliacao_time.clone(),
            rating.sequential_number.to_string(),
        ])
        .map_err(AppError::internal)?;
    }

    wtr.into_inner()
        .map_err(|err| AppError::internal(err.into_error()))
}
