use super::*;
use crate::record::EventRecord;
use crate::schema::RECORD_SIZE;
use proptest::prelude::*;
use std::io::Cursor;
use tempfile::tempdir;

fn sample_records() -> Vec<EventRecord> {
    vec![
        EventRecord::new(1, "electron,electron", 13000.0, 0.001022, 0.001022 / 13000.0),
        EventRecord::new(2, "jet", 13000.0, 50.0, 50.0 / 13000.0),
        EventRecord::new(-7, "", 13000.0, 0.0, 0.0),
    ]
}

fn little() -> RecordLayout {
    RecordLayout::new(Endianness::Little)
}

#[test]
fn test_record_is_304_bytes_with_fixed_offsets() {
    let record = EventRecord::new(258, "jet", 13000.0, 50.0, 0.25);
    let buf = encode_record(&record, Endianness::Little);

    assert_eq!(buf.len(), RECORD_SIZE);
    assert_eq!(&buf[0..4], &258i32.to_le_bytes());
    assert_eq!(&buf[INCOMING_OFFSET..INCOMING_OFFSET + 13], b"proton,proton");
    assert!(buf[INCOMING_OFFSET + 13..OUTGOING_OFFSET].iter().all(|&b| b == b' '));
    assert_eq!(&buf[OUTGOING_OFFSET..OUTGOING_OFFSET + 3], b"jet");
    assert!(buf[OUTGOING_OFFSET + 3..KINETIC_OFFSET].iter().all(|&b| b == b' '));
    assert_eq!(&buf[KINETIC_OFFSET..REST_OFFSET], &13000.0f32.to_le_bytes());
    assert_eq!(&buf[REST_OFFSET..EFFICIENCY_OFFSET], &50.0f32.to_le_bytes());
    assert_eq!(&buf[EFFICIENCY_OFFSET..], &0.25f32.to_le_bytes());
}

#[test]
fn test_big_endian_layout() {
    let record = EventRecord::new(1, "muon", 13000.0, 0.10566, 0.10566 / 13000.0);
    let buf = encode_record(&record, Endianness::Big);
    assert_eq!(&buf[0..4], &[0, 0, 0, 1]);
    assert_eq!(&buf[KINETIC_OFFSET..REST_OFFSET], &13000.0f32.to_be_bytes());
    assert_eq!(decode_record(&buf, Endianness::Big), record);
}

#[test]
fn test_native_matches_host_order() {
    let record = EventRecord::new(0x0102_0304, "", 1.5, 2.5, 3.5);
    let buf = encode_record(&record, Endianness::Native);
    assert_eq!(&buf[0..4], &0x0102_0304i32.to_ne_bytes());
}

#[test]
fn test_writer_concatenates_records() {
    let records = sample_records();
    let mut writer = RecordWriter::new(Vec::new(), little());
    writer.write_records(&records).unwrap();
    let stats = writer.stats();
    let bytes = writer.finish_into_inner().unwrap();

    assert_eq!(bytes.len(), 3 * RECORD_SIZE);
    assert_eq!(stats.records_written, 3);
    assert_eq!(stats.bytes_written, 3 * RECORD_SIZE as u64);
    assert_eq!(&bytes[RECORD_SIZE..RECORD_SIZE + 4], &2i32.to_le_bytes());
}

#[test]
fn test_empty_stream_has_zero_bytes() {
    let writer = RecordWriter::new(Vec::new(), RecordLayout::default());
    assert!(writer.finish_into_inner().unwrap().is_empty());
    assert!(decode_records(&[], RecordLayout::default()).unwrap().is_empty());
}

#[test]
fn test_decode_then_encode_is_byte_identical() {
    let mut bytes = Vec::new();
    for record in sample_records() {
        bytes.extend_from_slice(&encode_record(&record, Endianness::Little));
    }
    // Padding with NULs instead of spaces must survive unchanged.
    bytes[OUTGOING_OFFSET + 20] = 0;

    let decoded = decode_records(&bytes, little()).unwrap();
    let mut writer = RecordWriter::new(Vec::new(), little());
    writer.write_records(&decoded).unwrap();
    assert_eq!(writer.finish_into_inner().unwrap(), bytes);
}

#[test]
fn test_partial_trailing_record_rejected() {
    let mut bytes = encode_record(&sample_records()[0], Endianness::Native).to_vec();
    bytes.extend_from_slice(&[1, 2, 3]);

    assert!(matches!(
        decode_records(&bytes, RecordLayout::default()),
        Err(BinaryError::InvalidFormat(_))
    ));

    let mut reader = RecordReader::new(Cursor::new(bytes), RecordLayout::default());
    assert!(reader.next().unwrap().is_ok());
    assert!(matches!(reader.next(), Some(Err(BinaryError::InvalidFormat(_)))));
    assert!(reader.next().is_none());
}

#[test]
fn test_file_roundtrip_and_size_check() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("collision_data.bin");
    let records = sample_records();

    let stats = write_record_file(&path, &records, little()).unwrap();
    assert_eq!(stats.records_written, 3);
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 3 * RECORD_SIZE as u64);
    assert_eq!(read_record_file(&path, little()).unwrap(), records);

    let bad = dir.path().join("truncated.bin");
    std::fs::write(&bad, vec![0u8; RECORD_SIZE + 10]).unwrap();
    assert!(matches!(
        RecordReader::open(&bad, little()),
        Err(BinaryError::InvalidFormat(_))
    ));
}

#[test]
fn test_unfinished_file_writer_leaves_no_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");
    {
        let mut writer = RecordFileWriter::create(&path, little()).unwrap();
        writer.write_record(&sample_records()[0]).unwrap();
    }
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_file_writer_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.bin");
    std::fs::write(&path, b"stale").unwrap();

    let mut writer = RecordFileWriter::create(&path, little()).unwrap();
    writer.write_records(&sample_records()[..1]).unwrap();
    writer.finish().unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), RECORD_SIZE as u64);
}

#[test]
fn test_csv_output() {
    let mut out = Vec::new();
    let count = write_csv(&sample_records()[..2], &mut out).unwrap();
    assert_eq!(count, 2);

    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("eventId,incomingParticles,outgoingParticles,kineticEnergyIn,restEnergyOut,efficiency")
    );
    assert_eq!(
        lines.next(),
        Some("1,\"proton,proton\",\"electron,electron\",13000.000000,0.001022,0.000000")
    );
    assert_eq!(
        lines.next(),
        Some("2,\"proton,proton\",jet,13000.000000,50.000000,0.003846")
    );
}

#[test]
fn test_export_csv_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("collision_data.bin");
    write_record_file(&input, &sample_records(), RecordLayout::default()).unwrap();

    let output = default_csv_path(&input);
    assert_eq!(output, dir.path().join("all_events.csv"));
    let count = export_csv(&input, &output, RecordLayout::default()).unwrap();
    assert_eq!(count, 3);

    let mut reader = ::csv::Reader::from_path(&output).unwrap();
    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[2][0], "-7");
    assert_eq!(&rows[2][2], "");
}

#[test]
fn test_endianness_parsing() {
    assert_eq!("little".parse::<Endianness>().unwrap(), Endianness::Little);
    assert_eq!("BIG".parse::<Endianness>().unwrap(), Endianness::Big);
    assert_eq!("native".parse::<Endianness>().unwrap(), Endianness::Native);
    assert!("middle".parse::<Endianness>().is_err());
    assert_eq!(RecordLayout::default().byte_order, Endianness::Native);
}

proptest! {
    #[test]
    fn prop_decode_encode_identity(bytes in proptest::collection::vec(any::<u8>(), RECORD_SIZE)) {
        let mut buf = [0u8; RECORD_SIZE];
        buf.copy_from_slice(&bytes);
        for order in [Endianness::Little, Endianness::Big] {
            let record = decode_record(&buf, order);
            prop_assert_eq!(encode_record(&record, order), buf);
        }
    }
}
