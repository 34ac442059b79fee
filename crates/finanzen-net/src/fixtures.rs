//! Trimmed-down finanzen.net pages used by the tests.

pub(crate) const FUNDAMENTALS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="box table-quotes">
  <h2 class="box-headline">Die Aktie</h2>
  <table>
    <thead><tr><th></th><th>in EUR</th><th>2020</th><th>2021</th></tr></thead>
    <tbody>
      <tr><td><input type="checkbox"></td><td class="font-bold">Ergebnis je Aktie (unverwässert, nach Steuern)</td><td>4,35</td><td>4,35</td></tr>
      <tr><td><input type="checkbox"></td><td class="font-bold">Dividende je Aktie</td><td>1,85</td><td>2,45</td></tr>
    </tbody>
  </table>
</div>
<div class="box table-quotes">
  <h2 class="box-headline">Unternehmenskennzahlen</h2>
  <table>
    <thead><tr><th></th><th>in EUR</th><th>n/a</th><th>2021</th></tr></thead>
    <tbody>
      <tr><td><input type="checkbox"></td><td class="font-bold">KGV</td><td>24,1</td><td>22,3</td></tr>
    </tbody>
  </table>
</div>
<div class="box table-quotes">
  <h2 class="box-headline">SAP SE GuV (in Mio. EUR)</h2>
  <table>
    <thead><tr><th></th><th>in Mio. EUR</th><th>2020</th><th>2021</th></tr></thead>
    <tbody>
      <tr><td><input type="checkbox"></td><td class="font-bold">Umsatzerlöse</td><td>1.000</td><td>1.200</td></tr>
    </tbody>
  </table>
</div>
<div class="box table-quotes">
  <h2 class="box-headline">SAP SE Bilanz (in Mio. EUR)</h2>
  <table>
    <thead><tr><th></th><th>in Mio. EUR</th><th>2020</th><th>2021</th></tr></thead>
    <tbody>
      <tr><td><input type="checkbox"></td><td class="font-bold">Summe Aktiva</td><td>58.400,5</td><td>71.263,0</td></tr>
      <tr><td><input type="checkbox"></td><td class="font-bold">Goodwill</td><td>-</td><td>&lt; 0 *</td></tr>
    </tbody>
  </table>
</div>
</body>
</html>"#;

pub(crate) const ESTIMATES_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="box table-quotes">
  <h1>Schätzungen* zu SAP SE (EUR)</h1>
  <table>
    <tr><th></th><th>2023</th><th>2024e</th><th>2025e</th></tr>
    <tr><td>Umsatzerlöse in Mio.</td><td>31.207</td><td>34.000,5</td><td>-</td></tr>
    <tr><td>Ergebnis je Aktie</td><td>5,17 EUR</td><td>4,00 EUR</td><td>5,50 EUR</td></tr>
  </table>
</div>
</body>
</html>"#;

pub(crate) const ESTIMATES_PAGE_MALFORMED: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="box table-quotes">
  <h1>Schätzungen* zu SAP SE (EUR)</h1>
  <table>
    <tr><th></th><th>2023</th><th>2024e</th></tr>
    <tr><td>Umsatzerlöse in Mio.</td><td>31.207</td><td>k.A.</td></tr>
  </table>
</div>
</body>
</html>"#;

pub(crate) const PRICE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="snapshot">
  <div class="snapshot__values">
    <span class="snapshot__value-current">
      <span class="snapshot__value">1.182,64</span>
      <span class="snapshot__value-unit">EUR</span>
    </span>
  </div>
  <div class="snapshot__time">
    <time datetime="2021-03-05T17:35:05+01:00">05.03.2021 17:35:05</time>
  </div>
</div>
</body>
</html>"#;

pub(crate) const PRICE_PAGE_WITHOUT_QUOTE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="snapshot">
  <div class="snapshot__header">Kein Kurs verfügbar</div>
</div>
</body>
</html>"#;

pub(crate) const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="table">
  <table>
    <tr><th>Name</th><th>ISIN</th><th>WKN</th></tr>
    <tr><td><a href="/aktien/sap-aktie">SAP SE</a></td><td>DE0007164600</td><td>716460</td></tr>
    <tr><td><a href="/aktien/sap_adr-aktie">SAP SE (spons. ADRs)</a></td><td>US8030542042</td><td>A0M8QH</td></tr>
    <tr><td><a href="/fonds/sap-fonds">SAP Mitarbeiter Fonds</a></td><td>LU0000000001</td><td>A00001</td></tr>
    <tr><td><a href="https://www.finanzen.net/aktien/sapiens-aktie">Sapiens International</a></td><td>KYG7T16G1039</td><td>A0ND7Z</td></tr>
  </table>
</div>
</body>
</html>"#;

pub(crate) const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="special_info_box">Leider konnten keine passenden Ergebnisse gefunden werden.</div>
</body>
</html>"#;
