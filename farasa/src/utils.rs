use csv_core::ReadFieldResult;

const MAX_FIELD_LEN: usize = 4096;

/// Splits a row of a tab-separated table into its fields.
///
/// Quotes carry no meaning in these tables since Buckwalter keys may contain
/// any ASCII punctuation. Returns [`None`] if a field is longer than 4096 bytes.
pub fn parse_tsv_row(row: &str) -> Option<Vec<String>> {
    let mut fields = vec![];
    let mut rdr = csv_core::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .build();
    let mut bytes = row.as_bytes();
    let mut output = [0; MAX_FIELD_LEN];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        let end = match result {
            ReadFieldResult::InputEmpty => true,
            ReadFieldResult::Field { .. } => false,
            ReadFieldResult::End => true,
            ReadFieldResult::OutputFull => return None,
        };
        fields.push(String::from_utf8_lossy(&output[..nout]).into_owned());
        if end {
            break;
        }
        bytes = &bytes[nin..];
    }
    Some(fields)
}
