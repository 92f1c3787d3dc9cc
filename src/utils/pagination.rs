// Paginación en cliente sobre la lista completa ya descargada

/// Número de páginas (mínimo 1, aunque la lista esté vacía)
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 || total == 0 {
        return 1;
    }
    total.div_ceil(page_size)
}

/// Ajusta `page` (base 0) al rango válido
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.min(page_count(total, page_size).saturating_sub(1))
}

/// Filas de la página `page` (base 0); con `page_size == 0` no pagina
pub fn page_slice<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return records;
    }
    let page = clamp_page(page, records.len(), page_size);
    let start = page.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    records.get(start..end).unwrap_or(&[])
}
