//! Record layouts for the R16 and later ECHI formats (versions 16, 163 and 170)
//!
//! R16 added UTC shadows for both segment timestamps, so SEGSTOP moves to field 8 and
//! four timestamp columns (6..10) are rendered. Login and VDN fields widen to 16 bytes.
//! Versions 163 and 170 append numeric fields after the text block, so their string
//! range is closed.
//!
//! These tables are reconstructed, not taken from the vendor's published layouts. The
//! record lengths, the field positions the corrections rely on and the version 2 shape
//! are fixed; the remaining column order follows the documented CMS call history field
//! list, with unaccounted bytes declared as trailing reserved `Skip` slots. Check a
//! table against a real capture before relying on individual column positions.

use super::{BitField, FormatDescriptor, Slot};

pub(crate) static V16: FormatDescriptor = FormatDescriptor {
    version: 16,
    record_length: 615,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTART_UTC
        Slot::U32, // SEGSTOP
        Slot::U32, // SEGSTOP_UTC
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U32, // QUEUETIME
        Slot::U32, // RINGTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::U8, // INTERRUPTDEL
        Slot::U8, // AGENTSURPLUS
        Slot::U8, // AGENTSKILLLEVEL
        Slot::U8, // PREFSKILLLEVEL
        Slot::Text(21), // UCID
        Slot::Text(16), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(16), // FIRSTVDN
        Slot::Text(16), // ORIGLOGIN
        Slot::Text(16), // ANSLOGIN
        Slot::Text(16), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(25), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Text(17), // CWC1
        Slot::Text(17), // CWC2
        Slot::Text(17), // CWC3
        Slot::Text(17), // CWC4
        Slot::Text(17), // CWC5
        Slot::Text(16), // VDN2
        Slot::Text(16), // VDN3
        Slot::Text(16), // VDN4
        Slot::Text(16), // VDN5
        Slot::Text(16), // VDN6
        Slot::Text(16), // VDN7
        Slot::Text(16), // VDN8
        Slot::Text(16), // VDN9
        Slot::Text(97), // ASAI_UUI
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTART_UTC", "SEGSTOP", "SEGSTOP_UTC", "TALKTIME", "NETINTIME", "ORIGHOLDTIME",
        "QUEUETIME", "RINGTIME", "DISPIVECTOR", "DISPSPLIT", "FIRSTIVECTOR", "SPLIT1", "SPLIT2",
        "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED", "HOLDABN", "MALICIOUS", "OBSERVINGCALL",
        "TRANSFERRED", "AGT_RELEASED", "SPLIT3", "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID",
        "OBS_LOCID", "UUI_LEN", "ACD", "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT",
        "ANSREASON", "ORIGREASON", "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4",
        "EVENT5", "EVENT6", "EVENT7", "EVENT8", "EVENT9", "INTERRUPTDEL", "AGENTSURPLUS",
        "AGENTSKILLLEVEL", "PREFSKILLLEVEL", "UCID", "DISPVDN", "EQLOC", "FIRSTVDN",
        "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER", "DIALED_NUM", "CALLING_PTY", "LASTDIGITS",
        "LASTCWC", "CALLING_II", "CWC1", "CWC2", "CWC3", "CWC4", "CWC5", "VDN2", "VDN3", "VDN4",
        "VDN5", "VDN6", "VDN7", "VDN8", "VDN9", "ASAI_UUI",
    ],
    bit_field: BitField { byte_offset: 70, bit_count: 9, splice_index: 20 },
    signed_indices: &[15, 17],
    segment_index: 40,
    segstop_index: 8,
    timestamp_fields: 6..10,
    string_start: 57,
    string_end: None,
};

pub(crate) static V163: FormatDescriptor = FormatDescriptor {
    version: 163,
    record_length: 617,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTART_UTC
        Slot::U32, // SEGSTOP
        Slot::U32, // SEGSTOP_UTC
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U32, // QUEUETIME
        Slot::U32, // RINGTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::U8, // INTERRUPTDEL
        Slot::U8, // AGENTSURPLUS
        Slot::U8, // AGENTSKILLLEVEL
        Slot::U8, // PREFSKILLLEVEL
        Slot::Text(21), // UCID
        Slot::Text(16), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(16), // FIRSTVDN
        Slot::Text(16), // ORIGLOGIN
        Slot::Text(16), // ANSLOGIN
        Slot::Text(16), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(25), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Text(17), // CWC1
        Slot::Text(17), // CWC2
        Slot::Text(17), // CWC3
        Slot::Text(17), // CWC4
        Slot::Text(17), // CWC5
        Slot::Text(16), // VDN2
        Slot::Text(16), // VDN3
        Slot::Text(16), // VDN4
        Slot::Text(16), // VDN5
        Slot::Text(16), // VDN6
        Slot::Text(16), // VDN7
        Slot::Text(16), // VDN8
        Slot::Text(16), // VDN9
        Slot::Text(97), // ASAI_UUI
        Slot::U8, // AGENT_ROLE
        Slot::U8, // CALL_ORIGIN
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTART_UTC", "SEGSTOP", "SEGSTOP_UTC", "TALKTIME", "NETINTIME", "ORIGHOLDTIME",
        "QUEUETIME", "RINGTIME", "DISPIVECTOR", "DISPSPLIT", "FIRSTIVECTOR", "SPLIT1", "SPLIT2",
        "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED", "HOLDABN", "MALICIOUS", "OBSERVINGCALL",
        "TRANSFERRED", "AGT_RELEASED", "SPLIT3", "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID",
        "OBS_LOCID", "UUI_LEN", "ACD", "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT",
        "ANSREASON", "ORIGREASON", "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4",
        "EVENT5", "EVENT6", "EVENT7", "EVENT8", "EVENT9", "INTERRUPTDEL", "AGENTSURPLUS",
        "AGENTSKILLLEVEL", "PREFSKILLLEVEL", "UCID", "DISPVDN", "EQLOC", "FIRSTVDN",
        "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER", "DIALED_NUM", "CALLING_PTY", "LASTDIGITS",
        "LASTCWC", "CALLING_II", "CWC1", "CWC2", "CWC3", "CWC4", "CWC5", "VDN2", "VDN3", "VDN4",
        "VDN5", "VDN6", "VDN7", "VDN8", "VDN9", "ASAI_UUI", "AGENT_ROLE", "CALL_ORIGIN",
    ],
    bit_field: BitField { byte_offset: 70, bit_count: 9, splice_index: 20 },
    signed_indices: &[15, 17],
    segment_index: 40,
    segstop_index: 8,
    timestamp_fields: 6..10,
    string_start: 57,
    string_end: Some(82),
};

pub(crate) static V170: FormatDescriptor = FormatDescriptor {
    version: 170,
    record_length: 629,
    layout: &[
        Slot::U32, // CALLID
        Slot::U32, // ACWTIME
        Slot::U32, // ANSHOLDTIME
        Slot::U32, // CONSULTTIME
        Slot::U32, // DISPTIME
        Slot::U32, // DURATION
        Slot::U32, // SEGSTART
        Slot::U32, // SEGSTART_UTC
        Slot::U32, // SEGSTOP
        Slot::U32, // SEGSTOP_UTC
        Slot::U32, // TALKTIME
        Slot::U32, // NETINTIME
        Slot::U32, // ORIGHOLDTIME
        Slot::U32, // QUEUETIME
        Slot::U32, // RINGTIME
        Slot::U16, // DISPIVECTOR
        Slot::U16, // DISPSPLIT
        Slot::U16, // FIRSTIVECTOR
        Slot::U16, // SPLIT1
        Slot::U16, // SPLIT2
        Slot::U16, // packed flags
        Slot::U16, // SPLIT3
        Slot::U16, // TKGRP
        Slot::U16, // EQ_LOCID
        Slot::U16, // ORIG_LOCID
        Slot::U16, // ANS_LOCID
        Slot::U16, // OBS_LOCID
        Slot::U16, // UUI_LEN
        Slot::U8, // ACD
        Slot::U8, // CALL_DISP
        Slot::U8, // DISPPRIORITY
        Slot::U8, // HELD
        Slot::U8, // SEGMENT
        Slot::U8, // ANSREASON
        Slot::U8, // ORIGREASON
        Slot::U8, // DISPSKLEVEL
        Slot::U8, // EVENT1
        Slot::U8, // EVENT2
        Slot::U8, // EVENT3
        Slot::U8, // EVENT4
        Slot::U8, // EVENT5
        Slot::U8, // EVENT6
        Slot::U8, // EVENT7
        Slot::U8, // EVENT8
        Slot::U8, // EVENT9
        Slot::U8, // INTERRUPTDEL
        Slot::U8, // AGENTSURPLUS
        Slot::U8, // AGENTSKILLLEVEL
        Slot::U8, // PREFSKILLLEVEL
        Slot::Text(21), // UCID
        Slot::Text(16), // DISPVDN
        Slot::Text(10), // EQLOC
        Slot::Text(16), // FIRSTVDN
        Slot::Text(16), // ORIGLOGIN
        Slot::Text(16), // ANSLOGIN
        Slot::Text(16), // LASTOBSERVER
        Slot::Text(25), // DIALED_NUM
        Slot::Text(25), // CALLING_PTY
        Slot::Text(17), // LASTDIGITS
        Slot::Text(17), // LASTCWC
        Slot::Text(3), // CALLING_II
        Slot::Text(17), // CWC1
        Slot::Text(17), // CWC2
        Slot::Text(17), // CWC3
        Slot::Text(17), // CWC4
        Slot::Text(17), // CWC5
        Slot::Text(16), // VDN2
        Slot::Text(16), // VDN3
        Slot::Text(16), // VDN4
        Slot::Text(16), // VDN5
        Slot::Text(16), // VDN6
        Slot::Text(16), // VDN7
        Slot::Text(16), // VDN8
        Slot::Text(16), // VDN9
        Slot::Text(97), // ASAI_UUI
        Slot::U8, // AGENT_ROLE
        Slot::U8, // CALL_ORIGIN
        Slot::U32, // CONFERENCE_TIME
        Slot::U32, // TRANSFER_TIME
        Slot::U16, // ORIG_SITE
        Slot::U16, // ANS_SITE
    ],
    column_names: &[
        "CALLID", "ACWTIME", "ANSHOLDTIME", "CONSULTTIME", "DISPTIME", "DURATION", "SEGSTART",
        "SEGSTART_UTC", "SEGSTOP", "SEGSTOP_UTC", "TALKTIME", "NETINTIME", "ORIGHOLDTIME",
        "QUEUETIME", "RINGTIME", "DISPIVECTOR", "DISPSPLIT", "FIRSTIVECTOR", "SPLIT1", "SPLIT2",
        "ASSIST", "AUDIO", "CONFERENCE", "DA_QUEUED", "HOLDABN", "MALICIOUS", "OBSERVINGCALL",
        "TRANSFERRED", "AGT_RELEASED", "SPLIT3", "TKGRP", "EQ_LOCID", "ORIG_LOCID", "ANS_LOCID",
        "OBS_LOCID", "UUI_LEN", "ACD", "CALL_DISP", "DISPPRIORITY", "HELD", "SEGMENT",
        "ANSREASON", "ORIGREASON", "DISPSKLEVEL", "EVENT1", "EVENT2", "EVENT3", "EVENT4",
        "EVENT5", "EVENT6", "EVENT7", "EVENT8", "EVENT9", "INTERRUPTDEL", "AGENTSURPLUS",
        "AGENTSKILLLEVEL", "PREFSKILLLEVEL", "UCID", "DISPVDN", "EQLOC", "FIRSTVDN",
        "ORIGLOGIN", "ANSLOGIN", "LASTOBSERVER", "DIALED_NUM", "CALLING_PTY", "LASTDIGITS",
        "LASTCWC", "CALLING_II", "CWC1", "CWC2", "CWC3", "CWC4", "CWC5", "VDN2", "VDN3", "VDN4",
        "VDN5", "VDN6", "VDN7", "VDN8", "VDN9", "ASAI_UUI", "AGENT_ROLE", "CALL_ORIGIN",
        "CONFERENCE_TIME", "TRANSFER_TIME", "ORIG_SITE", "ANS_SITE",
    ],
    bit_field: BitField { byte_offset: 70, bit_count: 9, splice_index: 20 },
    signed_indices: &[15, 17],
    segment_index: 40,
    segstop_index: 8,
    timestamp_fields: 6..10,
    string_start: 57,
    string_end: Some(82),
};
