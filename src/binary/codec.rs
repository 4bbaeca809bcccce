use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};

use super::Endianness;
use crate::record::{EventRecord, IncomingText, OutgoingText};
use crate::schema::{EVENT_ID_WIDTH, FLOAT_WIDTH, INCOMING_WIDTH, OUTGOING_WIDTH, RECORD_SIZE};

/// Byte offset of `incomingParticles`
pub const INCOMING_OFFSET: usize = EVENT_ID_WIDTH;
/// Byte offset of `outgoingParticles`
pub const OUTGOING_OFFSET: usize = INCOMING_OFFSET + INCOMING_WIDTH;
/// Byte offset of `kineticEnergyIn`
pub const KINETIC_OFFSET: usize = OUTGOING_OFFSET + OUTGOING_WIDTH;
/// Byte offset of `restEnergyOut`
pub const REST_OFFSET: usize = KINETIC_OFFSET + FLOAT_WIDTH;
/// Byte offset of `efficiency`
pub const EFFICIENCY_OFFSET: usize = REST_OFFSET + FLOAT_WIDTH;

fn encode_with<B: ByteOrder>(record: &EventRecord, buf: &mut [u8; RECORD_SIZE]) {
    B::write_i32(&mut buf[..INCOMING_OFFSET], record.event_id);
    buf[INCOMING_OFFSET..OUTGOING_OFFSET].copy_from_slice(record.incoming_particles.as_bytes());
    buf[OUTGOING_OFFSET..KINETIC_OFFSET].copy_from_slice(record.outgoing_particles.as_bytes());
    B::write_f32(&mut buf[KINETIC_OFFSET..REST_OFFSET], record.kinetic_energy_in);
    B::write_f32(&mut buf[REST_OFFSET..EFFICIENCY_OFFSET], record.rest_energy_out);
    B::write_f32(&mut buf[EFFICIENCY_OFFSET..], record.efficiency);
}

fn decode_with<B: ByteOrder>(buf: &[u8; RECORD_SIZE]) -> EventRecord {
    let mut incoming = [0u8; INCOMING_WIDTH];
    incoming.copy_from_slice(&buf[INCOMING_OFFSET..OUTGOING_OFFSET]);
    let mut outgoing = [0u8; OUTGOING_WIDTH];
    outgoing.copy_from_slice(&buf[OUTGOING_OFFSET..KINETIC_OFFSET]);

    EventRecord {
        event_id: B::read_i32(&buf[..INCOMING_OFFSET]),
        incoming_particles: IncomingText::from_array(incoming),
        outgoing_particles: OutgoingText::from_array(outgoing),
        kinetic_energy_in: B::read_f32(&buf[KINETIC_OFFSET..REST_OFFSET]),
        rest_energy_out: B::read_f32(&buf[REST_OFFSET..EFFICIENCY_OFFSET]),
        efficiency: B::read_f32(&buf[EFFICIENCY_OFFSET..]),
    }
}

/// Encode one record into its fixed 304-byte form
pub fn encode_record(record: &EventRecord, byte_order: Endianness) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    match byte_order {
        Endianness::Native => encode_with::<NativeEndian>(record, &mut buf),
        Endianness::Little => encode_with::<LittleEndian>(record, &mut buf),
        Endianness::Big => encode_with::<BigEndian>(record, &mut buf),
    }
    buf
}

/// Decode one record; text fields are kept byte for byte
pub fn decode_record(buf: &[u8; RECORD_SIZE], byte_order: Endianness) -> EventRecord {
    match byte_order {
        Endianness::Native => decode_with::<NativeEndian>(buf),
        Endianness::Little => decode_with::<LittleEndian>(buf),
        Endianness::Big => decode_with::<BigEndian>(buf),
    }
}
