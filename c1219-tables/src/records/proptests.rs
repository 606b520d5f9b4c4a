//! Write-then-parse properties for every record shape

use super::*;
use c1219_core::{ByteOrder, MeterTime, U24, U48};
use proptest::prelude::*;

fn u24() -> impl Strategy<Value = U24> {
    (0u32..=0x00FF_FFFF).prop_map(U24::truncate)
}

fn u48() -> impl Strategy<Value = U48> {
    (0u64..=0xFFFF_FFFF_FFFF).prop_map(U48::truncate)
}

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::BigEndian), Just(ByteOrder::LittleEndian)]
}

fn block_price() -> impl Strategy<Value = BlockPriceEntry> {
    (any::<u32>(), u48()).prop_map(|(price, threshold)| BlockPriceEntry { price, threshold })
}

fn block_period(blocks: usize) -> impl Strategy<Value = BlockPeriod> {
    (
        any::<u32>(),
        u24(),
        any::<u32>(),
        prop::collection::vec(block_price(), blocks),
        prop::collection::vec(any::<u32>(), blocks),
    )
        .prop_map(|(start, duration, standing_charge, prices, event_ids)| BlockPeriod {
            start: MeterTime(start),
            duration,
            standing_charge,
            prices,
            event_ids,
        })
}

fn publish_price(blocks: usize) -> impl Strategy<Value = PublishPriceData> {
    (
        any::<u32>(),
        any::<u16>(),
        any::<u8>(),
        any::<u8>(),
        prop::collection::vec("[A-Za-z0-9]{0,12}", blocks),
    )
        .prop_map(
            |(provider_id, currency_code, price_control, unit_of_measure, labels)| {
                PublishPriceData {
                    provider_id,
                    currency_code,
                    price_control,
                    unit_of_measure,
                    rate_labels: labels
                        .iter()
                        .map(|l| RateLabel::new(l).unwrap())
                        .collect(),
                }
            },
        )
}

fn rflan_neighbor() -> impl Strategy<Value = RfLanNeighbor> {
    (
        any::<u64>(),
        any::<i8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u16>(),
        any::<u32>(),
        any::<u16>(),
    )
        .prop_map(
            |(mac_address, rssi, link_quality, hop_count, flags, heard, transmit_failures)| {
                RfLanNeighbor {
                    mac_address,
                    rssi,
                    link_quality,
                    hop_count,
                    flags,
                    last_heard: MeterTime(heard),
                    transmit_failures,
                }
            },
        )
}

/// Write `record`, check the byte count, parse it back
fn reparse<R: Record>(record: &R, context: R::Context, order: ByteOrder) -> R {
    let mut writer = TableWriter::with_order(order);
    record.write(&mut writer, context).unwrap();
    assert_eq!(writer.len(), R::size(context));
    let bytes = writer.into_bytes();
    let mut reader = TableReader::with_order(&bytes, order);
    let parsed = R::parse(&mut reader, context).unwrap();
    assert!(reader.is_empty());
    parsed
}

proptest! {
    #[test]
    fn prop_billing_period(start in any::<u32>(), duration in u24(), order in byte_order()) {
        let record = BillingPeriod { start: MeterTime(start), duration };
        prop_assert_eq!(reparse(&record, (), order), record);
    }

    #[test]
    fn prop_block_price(record in block_price(), order in byte_order()) {
        prop_assert_eq!(reparse(&record, (), order), record);
    }

    #[test]
    fn prop_block_period(
        (blocks, record) in (0usize..8).prop_flat_map(|n| (Just(n), block_period(n))),
        order in byte_order(),
    ) {
        prop_assert_eq!(reparse(&record, blocks, order), record);
    }

    #[test]
    fn prop_next_block_period(
        start in any::<u32>(),
        duration in u24(),
        standing_charge in any::<u32>(),
        order in byte_order(),
    ) {
        let record = NextBlockPeriod { start: MeterTime(start), duration, standing_charge };
        prop_assert_eq!(reparse(&record, (), order), record);
    }

    #[test]
    fn prop_publish_price(
        (blocks, record) in (0usize..6).prop_flat_map(|n| (Just(n), publish_price(n))),
        order in byte_order(),
    ) {
        prop_assert_eq!(reparse(&record, blocks, order), record);
    }

    #[test]
    fn prop_rib_config_keeps_reserved_bits(raw in any::<u16>(), order in byte_order()) {
        let record = RibConfig(raw);
        prop_assert_eq!(reparse(&record, (), order), record);
    }

    #[test]
    fn prop_rflan_neighbor(record in rflan_neighbor(), order in byte_order()) {
        prop_assert_eq!(reparse(&record, (), order), record);
    }
}
