#![no_std]

//! Control page served to browsers on the local network
//!
//! The page is a static template with two slider values spliced in as
//! 3-digit decimals. Because the fields have fixed width, a rendered page
//! can be updated in place when the levels change instead of being built
//! again.

use heapless::Vec;

/// Size of the page buffer
pub const PAGE_CAPACITY: usize = 3072;

/// Width of a spliced level field
const FIELD_WIDTH: usize = 3;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html><head><meta name="viewport" content="width=device-width"><script>
var effect = false;
var socket = new WebSocket('ws://' + location.hostname + ':81/', ['arduino']);
socket.onopen = function () { socket.send('Connect ' + new Date()); };
socket.onerror = function (e) { console.log('socket error', e); };
function hex2(id) {
  var h = parseInt(document.getElementById(id).value).toString(16);
  return h.length < 2 ? '0' + h : h;
}
function sendLevels() { socket.send('#' + hex2('s') + hex2('v')); }
function setSliders(enabled) {
  ['s', 'v'].forEach(function (id) {
    var el = document.getElementById(id);
    el.disabled = !enabled;
    el.className = enabled ? 'enabled' : 'disabled';
  });
}
function toggleEffect() {
  effect = !effect;
  socket.send(effect ? 'Effect ON' : 'Normal Mode');
  document.getElementById('effect').style.backgroundColor = effect ? '#00878F' : '#999';
  setSliders(!effect);
}
</script></head>
<body><center><h2>LED Matrix Control</h2>
<table><tr>
<td>V: </td><td><input id="v" type="range" min="24" max="255" step="1" value=""#;

const PAGE_SAT: &str = r#"" oninput="sendLevels();" /></td></tr>
<tr><td>S: </td><td><input id="s" type="range" min="40" max="255" step="1" value=""#;

const PAGE_HOSTNAME: &str = r#"" oninput="sendLevels();" /></td></tr></table><br/>
<button id="effect" style="background-color:#999" onclick="toggleEffect();">Effect</button><br/><br/>
<font size="1">Hostname: "#;

const PAGE_TAIL: &str = r#"</font>
</center></body></html>
"#;

/// Offset of the value field
const VAL_FIELD: usize = PAGE_HEAD.len();
/// Offset of the saturation field
const SAT_FIELD: usize = VAL_FIELD + FIELD_WIDTH + PAGE_SAT.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// Rendered page does not fit in [`PAGE_CAPACITY`]
    Overflow,
}

/// Rendered control page
#[derive(Clone, Debug)]
pub struct HomePage {
    buffer: Vec<u8, PAGE_CAPACITY>,
}

impl HomePage {
    /// Render the page with the current levels and the device hostname
    pub fn render(sat: u8, val: u8, hostname: &str) -> Result<Self, PageError> {
        let mut buffer = Vec::new();
        for part in [
            PAGE_HEAD.as_bytes(),
            decimal3(val).as_slice(),
            PAGE_SAT.as_bytes(),
            decimal3(sat).as_slice(),
            PAGE_HOSTNAME.as_bytes(),
            hostname.as_bytes(),
            PAGE_TAIL.as_bytes(),
        ] {
            buffer
                .extend_from_slice(part)
                .map_err(|()| PageError::Overflow)?;
        }
        Ok(Self { buffer })
    }

    /// Overwrite the two level fields of an already rendered page
    pub fn patch(&mut self, sat: u8, val: u8) {
        self.buffer[VAL_FIELD..VAL_FIELD + FIELD_WIDTH].copy_from_slice(&decimal3(val));
        self.buffer[SAT_FIELD..SAT_FIELD + FIELD_WIDTH].copy_from_slice(&decimal3(sat));
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn as_str(&self) -> &str {
        // Only ever filled from `&str` parts and ASCII digits
        core::str::from_utf8(&self.buffer).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Zero-padded 3-digit decimal
fn decimal3(value: u8) -> [u8; FIELD_WIDTH] {
    [
        b'0' + value / 100,
        b'0' + value / 10 % 10,
        b'0' + value % 10,
    ]
}
