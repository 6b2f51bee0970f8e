//! Low-level PDF object table, cross-reference table, and trailer.

/// PDF file signature: version comment plus the conventional high-byte
/// marker line that flags the file as binary.
const HEADER: &[u8] = b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n";

/// Accumulates object bodies and serializes them with an exact
/// cross-reference table.
///
/// Objects are identified by their 1-based position in insertion order;
/// callers that cross-reference objects by number fix the order before
/// writing anything. Byte offsets are tracked as the output buffer grows,
/// never recomputed by re-scanning.
pub struct PdfWriter {
    objects: Vec<Vec<u8>>,
}

impl PdfWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Append an object body, returning its 1-based object number.
    pub fn add_object(&mut self, body: Vec<u8>) -> usize {
        self.objects.push(body);
        self.objects.len()
    }

    /// Number of objects added so far.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Serialize header, objects, xref table, and trailer into the final
    /// byte stream.
    pub fn finish(self) -> Vec<u8> {
        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(HEADER);

        let mut offsets: Vec<usize> = Vec::with_capacity(self.objects.len());
        for (index, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", index + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", self.objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }

        out.extend_from_slice(b"trailer\n");
        out.extend_from_slice(
            format!("<< /Size {} /Root 1 0 R >>\n", self.objects.len() + 1).as_bytes(),
        );
        out.extend_from_slice(b"startxref\n");
        out.extend_from_slice(format!("{xref_start}\n").as_bytes());
        out.extend_from_slice(b"%%EOF\n");
        out
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}
